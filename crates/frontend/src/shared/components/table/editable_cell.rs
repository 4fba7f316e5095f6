//! Inline-editable money cell.
//!
//! `idle -> editing -> saving -> idle`. The parent owns the write and flips
//! `saving` back to false once its refetch is done.

use contracts::shared::money::parse_money_input;
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use thaw::*;

use super::number_format::format_optional_currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPhase {
    #[default]
    Idle,
    Editing,
    Saving,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditableCellState {
    pub phase: EditPhase,
    pub draft: String,
}

impl EditableCellState {
    pub fn begin(&mut self, current: Option<f64>) {
        if self.phase != EditPhase::Idle {
            return;
        }
        self.phase = EditPhase::Editing;
        self.draft = current.map(|v| v.to_string()).unwrap_or_default();
    }

    pub fn set_draft(&mut self, text: String) {
        if self.phase == EditPhase::Editing {
            self.draft = text;
        }
    }

    /// The parsed value to submit. An unparsable draft silently drops back to
    /// idle; outside of editing this is a no-op.
    pub fn commit(&mut self) -> Option<f64> {
        if self.phase != EditPhase::Editing {
            return None;
        }
        match parse_money_input(&self.draft) {
            Some(value) => {
                self.phase = EditPhase::Saving;
                Some(value)
            }
            None => {
                self.phase = EditPhase::Idle;
                self.draft.clear();
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        if self.phase == EditPhase::Editing {
            self.phase = EditPhase::Idle;
            self.draft.clear();
        }
    }

    pub fn finish(&mut self) {
        if self.phase == EditPhase::Saving {
            self.phase = EditPhase::Idle;
            self.draft.clear();
        }
    }
}

#[component]
pub fn TableCellEditableMoney(
    #[prop(into)] value: Signal<Option<f64>>,
    #[prop(into)] saving: Signal<bool>,
    on_commit: Callback<f64>,
) -> impl IntoView {
    let state = RwSignal::new(EditableCellState::default());
    let phase = Memo::new(move |_| state.with(|s| s.phase));
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        if !saving.get() {
            state.update(EditableCellState::finish);
        }
    });

    Effect::new(move |_| {
        if phase.get() == EditPhase::Editing {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
                input.select();
            }
        }
    });

    let commit = move || {
        let mut next = state.get_untracked();
        let submitted = next.commit();
        state.set(next);
        if let Some(amount) = submitted {
            on_commit.run(amount);
        }
    };

    let on_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            commit();
        }
        "Escape" => {
            ev.stop_propagation();
            state.update(EditableCellState::cancel);
        }
        _ => {}
    };

    view! {
        <TableCell class="text-right">
            {move || match phase.get() {
                EditPhase::Editing => view! {
                    <input
                        node_ref=input_ref
                        type="text"
                        class="cell-editor"
                        prop:value=move || state.with_untracked(|s| s.draft.clone())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            state.update(|s| s.set_draft(text));
                        }
                        on:keydown=on_keydown
                        on:blur=move |_| commit()
                        on:click=|ev| ev.stop_propagation()
                    />
                }
                .into_any(),
                EditPhase::Saving => view! {
                    <span class="cell-saving">
                        <Spinner size=SpinnerSize::Tiny />
                    </span>
                }
                .into_any(),
                EditPhase::Idle => view! {
                    <span
                        class="cell-editable"
                        title="Click to edit"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            state.update(|s| s.begin(value.get_untracked()));
                        }
                    >
                        {move || format_optional_currency(value.get())}
                    </span>
                }
                .into_any(),
            }}
        </TableCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing(draft: &str) -> EditableCellState {
        let mut state = EditableCellState::default();
        state.begin(Some(100.0));
        state.set_draft(draft.to_string());
        state
    }

    #[test]
    fn begin_seeds_draft_with_current_value() {
        let mut state = EditableCellState::default();
        state.begin(Some(1234.0));
        assert_eq!(state.phase, EditPhase::Editing);
        assert_eq!(state.draft, "1234");
    }

    #[test]
    fn commit_strips_currency_formatting() {
        let mut state = editing("$1,234");
        assert_eq!(state.commit(), Some(1234.0));
        assert_eq!(state.phase, EditPhase::Saving);

        state.finish();
        assert_eq!(state.phase, EditPhase::Idle);
    }

    #[test]
    fn unparsable_draft_is_dropped_silently() {
        let mut state = editing("abc");
        assert_eq!(state.commit(), None);
        assert_eq!(state.phase, EditPhase::Idle);
        assert!(state.draft.is_empty());
    }

    #[test]
    fn second_commit_while_saving_is_ignored() {
        let mut state = editing("500");
        assert_eq!(state.commit(), Some(500.0));
        assert_eq!(state.commit(), None);
        assert_eq!(state.phase, EditPhase::Saving);
    }

    #[test]
    fn cancel_only_applies_while_editing() {
        let mut state = editing("500");
        state.cancel();
        assert_eq!(state.phase, EditPhase::Idle);

        let mut saving = editing("500");
        saving.commit();
        saving.cancel();
        assert_eq!(saving.phase, EditPhase::Saving);
    }
}
