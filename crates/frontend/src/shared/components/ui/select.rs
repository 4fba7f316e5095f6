use leptos::prelude::*;

/// Labelled `<select>` over `(value, label)` pairs.
///
/// The placeholder entry carries the empty value, which callers read as "none".
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <select
                class="form__select"
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>
                    {move || placeholder.get().unwrap_or_else(|| "Select...".to_string())}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, text)| {
                        let current = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == current>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Empty or non-numeric select values mean "nothing chosen".
pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_value_is_none() {
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id("abc"), None);
    }
}
