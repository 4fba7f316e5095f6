use contracts::domain::a110_am_outcome::OutcomeKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Spinner, SpinnerSize};

use super::super::api;
use super::state::TaskBoard;
use super::task_item::TaskItem;
use crate::shared::components::confirm;
use crate::shared::components::ui::ToneBadge;
use crate::shared::date_utils::today_iso;
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::notify::alert;
use crate::shared::reconcile::write_then_reconcile;

/// Replaces the board with the server's list; an error empties it.
async fn reload(
    kind: OutcomeKind,
    asset_hub_id: i64,
    board: RwSignal<TaskBoard>,
    loading: RwSignal<bool>,
) -> Result<(), String> {
    loading.set(true);
    let result = api::list_tasks(kind, asset_hub_id).await;
    loading.set(false);
    match result {
        Ok(tasks) => {
            board.update(|b| b.replace_tasks(tasks));
            Ok(())
        }
        Err(e) => {
            log::error!("load {} tasks for hub {} failed: {}", kind.slug(), asset_hub_id, e);
            board.update(|b| b.replace_tasks(Vec::new()));
            Err(e)
        }
    }
}

/// Task card of one outcome for one asset hub.
#[component]
pub fn OutcomeCard(
    kind: OutcomeKind,
    asset_hub_id: i64,
    #[prop(into)] master_collapsed: Signal<bool>,
) -> impl IntoView {
    let modal_stack = use_modal_stack();
    let board = RwSignal::new(TaskBoard::new(kind));
    let loading = RwSignal::new(false);

    let refetch = Callback::new(move |_: ()| {
        spawn_local(async move {
            if reload(kind, asset_hub_id, board, loading).await.is_err() {
                log::debug!("{} card for hub {} shows no tasks", kind.slug(), asset_hub_id);
            }
        });
    });
    refetch.run(());

    let add = move |code: String| {
        let Some(dto) = board.with_untracked(|b| b.plan_add(asset_hub_id, &code, today_iso()))
        else {
            return;
        };
        spawn_local(async move {
            let out = write_then_reconcile(
                api::create_task(kind, dto),
                || async {},
                || reload(kind, asset_hub_id, board, loading),
            )
            .await;
            if let Err(e) = out.write {
                alert(&format!("Failed to add {} task: {}", kind.task_label(&code), e));
            }
        });
    };

    let run_delete = Callback::new(move |_: ()| {
        let Some(task_id) = board.try_update(|b| b.confirm_delete()).flatten() else {
            return;
        };
        spawn_local(async move {
            let out = write_then_reconcile(
                api::delete_task(kind, task_id),
                || async {},
                || reload(kind, asset_hub_id, board, loading),
            )
            .await;
            if let Err(e) = out.write {
                alert(&format!("Failed to delete task: {}", e));
            }
        });
    });

    let on_delete = Callback::new(move |task_id: i64| {
        let Some(label) = board.try_update(|b| {
            b.request_delete(task_id).then(|| {
                b.tasks
                    .iter()
                    .find(|t| t.id == task_id)
                    .map(|t| kind.task_label(&t.task_type))
                    .unwrap_or_default()
            })
        })
        .flatten() else {
            return;
        };
        confirm(
            modal_stack,
            "Delete task",
            format!("Delete the \"{}\" task? This cannot be undone.", label),
            "Delete",
            run_delete,
        );
    });

    let task_count = move || board.with(|b| b.tasks.len());

    view! {
        <div class="outcome-card">
            <div class="outcome-card__header">
                <ToneBadge tone=kind.tone()>{kind.label()}</ToneBadge>
                <span class="outcome-card__count">{move || format!("{} tasks", task_count())}</span>
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
                <select
                    class="outcome-card__add"
                    prop:value=""
                    on:change=move |ev| {
                        let code = event_target_value(&ev);
                        event_target::<web_sys::HtmlSelectElement>(&ev).set_value("");
                        add(code);
                    }
                >
                    <option value="">"Add task..."</option>
                    {move || {
                        board
                            .with(|b| b.add_options())
                            .into_iter()
                            .map(|(spec, enabled)| {
                                view! {
                                    <option value=spec.code disabled=!enabled>
                                        {spec.label}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <div class="outcome-card__body">
                <Show when=move || task_count() == 0 && !loading.get()>
                    <div class="outcome-card__empty">"No tasks yet"</div>
                </Show>
                <For
                    each=move || board.with(|b| b.tasks.clone())
                    key=|task| task.id
                    children=move |initial| {
                        let task_id = initial.id;
                        let task = Signal::derive(move || {
                            board.with(|b| b.task(task_id)).unwrap_or_else(|| initial.clone())
                        });
                        let expanded = Signal::derive(move || {
                            board.with(|b| b.is_expanded(task_id, master_collapsed.get()))
                        });
                        view! {
                            <TaskItem
                                kind=kind
                                task_id=task_id
                                task=task
                                expanded=expanded
                                on_toggle=Callback::new(move |_| board.update(|b| b.toggle_expanded(task_id)))
                                on_delete=on_delete
                                on_saved=refetch
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}
