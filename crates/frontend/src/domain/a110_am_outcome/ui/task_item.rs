use contracts::domain::a110_am_outcome::{
    ExtraField, FieldKind, OutcomeKind, OutcomeTask, PatchOutcomeTaskDto,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::api;
use crate::shared::components::ui::ToneBadge;
use crate::shared::date_utils::{days_since, format_optional_date, today};
use crate::shared::debounce::Debouncer;
use crate::shared::icons::icon;

/// Idle typing time before a field is PATCHed.
pub const AUTOSAVE_DEBOUNCE_MS: i32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveStatus {
    Idle,
    Saving,
    Saved,
    Failed,
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Date => "date",
        FieldKind::Money | FieldKind::Percent | FieldKind::Text => "text",
    }
}

/// Whether a refetched server value may replace what the input shows.
/// Text typed since the last save stays until its own save has gone out.
fn accepts_server_value(pending_edit: bool) -> bool {
    !pending_edit
}

/// Input bound to a server value. Typing schedules `on_commit`; each
/// refetch resets the text to the server's copy unless an edit is pending.
#[component]
fn AutoSaveInput(
    #[prop(into)] label: String,
    input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    on_commit: Callback<String>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let debouncer = Debouncer::new(AUTOSAVE_DEBOUNCE_MS);
    let text = RwSignal::new(value.get_untracked());
    let pending = StoredValue::new(false);

    Effect::new(move |_| {
        let server = value.get();
        if accepts_server_value(pending.get_value()) {
            text.set(server);
        }
    });

    let on_input = move |typed: String| {
        pending.set_value(true);
        text.set(typed.clone());
        debouncer.schedule(move || {
            pending.set_value(false);
            on_commit.run(typed);
        });
    };

    let control = if multiline {
        view! {
            <textarea
                class="task-field__input task-field__input--notes"
                rows="3"
                prop:value=move || text.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="task-field__input"
                type=input_type
                prop:value=move || text.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="task-field">
            <span class="task-field__label">{label}</span>
            {control}
        </label>
    }
}

fn started_input_value(task: &OutcomeTask) -> String {
    task.task_started
        .as_deref()
        .map(|d| d.split('T').next().unwrap_or(d).to_string())
        .unwrap_or_default()
}

/// One task row: header with type, start date and age; body with the
/// auto-saving fields of its type. Everything shown is read from `task`,
/// the board's current server copy.
#[component]
pub fn TaskItem(
    kind: OutcomeKind,
    task_id: i64,
    #[prop(into)] task: Signal<OutcomeTask>,
    #[prop(into)] expanded: Signal<bool>,
    on_toggle: Callback<()>,
    on_delete: Callback<i64>,
    /// Runs after every PATCH, successful or not.
    on_saved: Callback<()>,
) -> impl IntoView {
    // The type of a task never changes.
    let task_type = task.with_untracked(|t| t.task_type.clone());
    let spec = kind.task_type(&task_type);
    let label = kind.task_label(&task_type);
    let status = RwSignal::new(SaveStatus::Idle);

    let save = move |patch: PatchOutcomeTaskDto| {
        status.set(SaveStatus::Saving);
        spawn_local(async move {
            match api::patch_task(kind, task_id, patch).await {
                Ok(()) => status.set(SaveStatus::Saved),
                Err(e) => {
                    log::error!("patch {} task {} failed: {}", kind.slug(), task_id, e);
                    status.set(SaveStatus::Failed);
                }
            }
            on_saved.run(());
        });
    };

    let started_label = move || task.with(|t| format_optional_date(t.task_started.as_deref()));
    let age = move || {
        task.with(|t| {
            t.task_started
                .as_deref()
                .and_then(|d| days_since(d, today()))
                .map(|days| format!("{} days", days))
        })
    };

    let extra_inputs = spec
        .map(|s| s.extra_fields)
        .unwrap_or_default()
        .iter()
        .map(|field: &'static ExtraField| {
            let on_commit = Callback::new(move |text: String| {
                match PatchOutcomeTaskDto::extra_field(field, &text) {
                    Some(patch) => save(patch),
                    None => log::debug!("ignoring unparsable {} input", field.key),
                }
            });
            view! {
                <AutoSaveInput
                    label=field.label
                    input_type=input_type(field.kind)
                    value=Signal::derive(move || task.with(|t| t.extra_text(field)))
                    on_commit=on_commit
                />
            }
        })
        .collect_view();

    view! {
        <div class="task-item" class:task-item--expanded=move || expanded.get()>
            <div class="task-item__header">
                <button class="icon-button" title="Expand" on:click=move |_| on_toggle.run(())>
                    {move || if expanded.get() { icon("chevron-down") } else { icon("chevron-right") }}
                </button>
                {match spec {
                    Some(s) => view! { <ToneBadge tone=s.tone>{label.clone()}</ToneBadge> }.into_any(),
                    None => view! { <span class="task-item__type">{label.clone()}</span> }.into_any(),
                }}
                <span class="task-item__started">{started_label}</span>
                <span class="task-item__age">{move || age().unwrap_or_default()}</span>
                <span class="task-item__status">
                    {move || match status.get() {
                        SaveStatus::Idle => "",
                        SaveStatus::Saving => "Saving...",
                        SaveStatus::Saved => "Saved",
                        SaveStatus::Failed => "Save failed",
                    }}
                </span>
                <button
                    class="icon-button icon-button--danger"
                    title="Delete task"
                    on:click=move |_| on_delete.run(task_id)
                >
                    {icon("trash")}
                </button>
            </div>
            <div class="task-item__body" class:task-item__body--hidden=move || !expanded.get()>
                <AutoSaveInput
                    label="Started"
                    input_type="date"
                    value=Signal::derive(move || task.with(started_input_value))
                    on_commit=Callback::new(move |text: String| save(PatchOutcomeTaskDto::task_started(&text)))
                />
                {extra_inputs}
                <AutoSaveInput
                    label="Notes"
                    input_type="text"
                    value=Signal::derive(move || task.with(|t| t.notes.clone().unwrap_or_default()))
                    multiline=true
                    on_commit=Callback::new(move |text: String| save(PatchOutcomeTaskDto::notes(&text)))
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(task_started: Option<&str>) -> OutcomeTask {
        OutcomeTask {
            id: 1,
            asset_hub: Some(9),
            task_type: "eviction".to_string(),
            task_started: task_started.map(str::to_string),
            notes: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn started_value_fits_date_input() {
        assert_eq!(started_input_value(&task(Some("2025-03-01T00:00:00Z"))), "2025-03-01");
        assert_eq!(started_input_value(&task(Some("2025-03-01"))), "2025-03-01");
        assert_eq!(started_input_value(&task(None)), "");
    }

    #[test]
    fn refetch_wins_once_no_edit_is_pending() {
        assert!(accepts_server_value(false));
        assert!(!accepts_server_value(true));
    }

    #[test]
    fn date_fields_use_date_inputs() {
        assert_eq!(input_type(FieldKind::Date), "date");
        assert_eq!(input_type(FieldKind::Money), "text");
    }
}
