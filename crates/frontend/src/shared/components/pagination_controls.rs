use leptos::prelude::*;

use crate::shared::icons::icon;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [25, 50, 100, 200];
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// First/prev/next/last buttons, a `page / pages (rows)` label and a page-size picker.
///
/// Pages are zero-based.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let at_start = move || current_page.get() == 0;
    let at_end = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="First page"
                disabled=at_start
                on:click=move |_| on_page_change.run(0)
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Previous page"
                disabled=at_start
                on:click=move |_| on_page_change.run(current_page.get_untracked().saturating_sub(1))
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                title="Next page"
                disabled=at_end
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if page + 1 < total_pages.get_untracked() {
                        on_page_change.run(page + 1);
                    }
                }
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Last page"
                disabled=at_end
                on:click=move |_| on_page_change.run(total_pages.get_untracked().saturating_sub(1))
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(DEFAULT_PAGE_SIZE);
                    on_page_size_change.run(size);
                }
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
