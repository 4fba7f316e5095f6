//! Client-side search, sort and paging for grids.
use std::cmp::Ordering;

use leptos::prelude::*;

use crate::shared::debounce::Debouncer;
use crate::shared::icons::icon;

/// Shorter queries leave the list unfiltered.
pub const MIN_SEARCH_LEN: usize = 3;
pub const SEARCH_DEBOUNCE_MS: i32 = 300;

pub trait Searchable {
    /// `filter` arrives lowercased and trimmed.
    fn matches_filter(&self, filter: &str) -> bool;
}

pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn is_filter_active(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_SEARCH_LEN
}

pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if !is_filter_active(filter) {
        return items.to_vec();
    }
    let needle = filter.trim().to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&needle))
        .cloned()
        .collect()
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// `None` sorts after every value in ascending order.
pub fn cmp_opt<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn cmp_opt_str(a: Option<&str>, b: Option<&str>) -> Ordering {
    cmp_opt(a.map(str::to_lowercase), b.map(str::to_lowercase))
}

pub fn contains_ci(value: Option<&str>, needle: &str) -> bool {
    value
        .map(|v| v.to_lowercase().contains(needle))
        .unwrap_or(false)
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 || total_count == 0 {
        1
    } else {
        total_count.div_ceil(page_size)
    }
}

/// Keeps a zero-based page inside the list after it shrinks.
pub fn clamp_page(page: usize, total_count: usize, page_size: usize) -> usize {
    page.min(total_pages(total_count, page_size) - 1)
}

pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page = clamp_page(page, items.len(), page_size);
    items
        .iter()
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

impl SortState {
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
            ascending: true,
        }
    }

    /// Same column flips direction; a new column starts ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field.to_string();
            self.ascending = true;
        }
    }

    pub fn indicator(&self, field: &str) -> &'static str {
        if self.field == field {
            if self.ascending {
                " ▲"
            } else {
                " ▼"
            }
        } else {
            " ⇅"
        }
    }
}

/// Search box that reports its value after the user stops typing.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        format!("Search (min. {} chars)...", MIN_SEARCH_LEN)
    } else {
        placeholder
    };
    let input_value = RwSignal::new(value.get_untracked());
    let debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);

    let on_input = move |text: String| {
        input_value.set(text.clone());
        debouncer.schedule(move || on_change.run(text));
    };

    let clear = move |_| {
        debouncer.cancel();
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=move || is_filter_active(&value.get())>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        value: Option<f64>,
    }

    impl Searchable for Item {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(Some(self.name), filter)
        }
    }

    impl Sortable for Item {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "value" => cmp_opt(self.value, other.value),
                _ => cmp_opt_str(Some(self.name), Some(other.name)),
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "Oak Street", value: Some(3.0) },
            Item { name: "Elm Avenue", value: None },
            Item { name: "Oakwood Drive", value: Some(1.0) },
        ]
    }

    #[test]
    fn short_filter_keeps_everything() {
        assert_eq!(filter_list(&items(), "oa").len(), 3);
        assert_eq!(filter_list(&items(), "  ").len(), 3);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let found = filter_list(&items(), "OAK");
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|i| i.name.starts_with("Oak")));
    }

    #[test]
    fn sort_puts_missing_values_last_when_ascending() {
        let mut list = items();
        sort_list(&mut list, "value", true);
        let values: Vec<_> = list.iter().map(|i| i.value).collect();
        assert_eq!(values, vec![Some(1.0), Some(3.0), None]);
    }

    #[test]
    fn sort_toggle() {
        let mut sort = SortState::new("name");
        sort.toggle("name");
        assert!(!sort.ascending);
        sort.toggle("value");
        assert_eq!(sort.field, "value");
        assert!(sort.ascending);
        assert_eq!(sort.indicator("value"), " ▲");
        assert_eq!(sort.indicator("name"), " ⇅");
    }

    #[test]
    fn paging_clamps_to_last_page() {
        assert_eq!(total_pages(0, 25), 1);
        assert_eq!(total_pages(51, 25), 3);
        assert_eq!(clamp_page(5, 51, 25), 2);
        assert_eq!(clamp_page(5, 10, 25), 0);

        let rows: Vec<u32> = (0..51).collect();
        assert_eq!(paginate(&rows, 2, 25), vec![50]);
        assert_eq!(paginate(&rows, 9, 25), vec![50]);
        assert_eq!(paginate(&rows, 0, 25).len(), 25);
    }
}
