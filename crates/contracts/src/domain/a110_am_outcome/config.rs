//! Per-outcome configuration table driving the generic outcome card.

use super::kind::OutcomeKind;
use crate::shared::tone::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Date,
    Money,
    Percent,
    Text,
}

/// Type-specific field a task of this type carries besides `task_started`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTypeSpec {
    pub code: &'static str,
    pub label: &'static str,
    pub tone: Tone,
    pub extra_fields: &'static [ExtraField],
}

const fn field(key: &'static str, label: &'static str, kind: FieldKind) -> ExtraField {
    ExtraField { key, label, kind }
}

const fn task(
    code: &'static str,
    label: &'static str,
    tone: Tone,
    extra_fields: &'static [ExtraField],
) -> TaskTypeSpec {
    TaskTypeSpec {
        code,
        label,
        tone,
        extra_fields,
    }
}

const FORECLOSURE_TASKS: &[TaskTypeSpec] = &[
    task("nod_noi", "NOD / NOI", Tone::Warning, &[]),
    task("fc_filing", "FC Filing", Tone::Warning, &[
        field("case_number", "Case Number", FieldKind::Text),
    ]),
    task("mediation", "Mediation", Tone::Info, &[]),
    task("judgement", "Judgement", Tone::Info, &[
        field("judgement_amount", "Judgement Amount", FieldKind::Money),
    ]),
    task("redemption", "Redemption", Tone::Info, &[
        field("redemption_end_date", "Redemption Ends", FieldKind::Date),
    ]),
    task("sale_scheduled", "Sale Scheduled", Tone::Brand, &[
        field("fc_sale_date", "Sale Date", FieldKind::Date),
        field("opening_bid", "Opening Bid", FieldKind::Money),
    ]),
    task("sold", "Sold", Tone::Success, &[
        field("fc_sale_price", "Sale Price", FieldKind::Money),
    ]),
];

const REO_TASKS: &[TaskTypeSpec] = &[
    task("eviction", "Eviction", Tone::Danger, &[]),
    task("trashout", "Trash-out", Tone::Warning, &[
        field("trashout_cost", "Cost", FieldKind::Money),
    ]),
    task("renovation", "Renovation", Tone::Warning, &[
        field("renovation_budget", "Budget", FieldKind::Money),
    ]),
    task("marketing", "Marketing", Tone::Info, &[
        field("list_price", "List Price", FieldKind::Money),
        field("list_date", "List Date", FieldKind::Date),
    ]),
    task("under_contract", "Under Contract", Tone::Brand, &[
        field("contract_price", "Contract Price", FieldKind::Money),
        field("contract_date", "Contract Date", FieldKind::Date),
    ]),
    task("sold", "Sold", Tone::Success, &[
        field("sale_price", "Sale Price", FieldKind::Money),
        field("sale_date", "Sale Date", FieldKind::Date),
    ]),
];

const DIL_TASKS: &[TaskTypeSpec] = &[
    task("pursuing_dil", "Pursuing DIL", Tone::Info, &[]),
    task("owner_contacted", "Owner Contacted", Tone::Info, &[]),
    task("dil_drafted", "DIL Drafted", Tone::Brand, &[
        field("cash_for_keys", "Cash for Keys", FieldKind::Money),
    ]),
    task("dil_executed", "DIL Executed", Tone::Success, &[
        field("dil_date", "Recorded", FieldKind::Date),
    ]),
    task("dil_failed", "DIL Failed", Tone::Danger, &[]),
];

const SHORT_SALE_TASKS: &[TaskTypeSpec] = &[
    task("list_price_accepted", "List Price Accepted", Tone::Info, &[
        field("approved_price", "Approved Price", FieldKind::Money),
    ]),
    task("listed", "Listed", Tone::Info, &[
        field("list_price", "List Price", FieldKind::Money),
    ]),
    task("under_contract", "Under Contract", Tone::Brand, &[
        field("contract_price", "Contract Price", FieldKind::Money),
    ]),
    task("sold", "Sold", Tone::Success, &[
        field("sale_price", "Sale Price", FieldKind::Money),
        field("sale_date", "Sale Date", FieldKind::Date),
    ]),
];

const MODIFICATION_TASKS: &[TaskTypeSpec] = &[
    task("mod_drafted", "Mod Drafted", Tone::Info, &[
        field("mod_rate", "Mod Rate", FieldKind::Percent),
        field("mod_term_months", "Term (months)", FieldKind::Text),
    ]),
    task("mod_executed", "Mod Executed", Tone::Brand, &[
        field("mod_date", "Executed", FieldKind::Date),
    ]),
    task("mod_rpl", "Re-Performing", Tone::Success, &[]),
    task("mod_failed", "Mod Failed", Tone::Danger, &[]),
];

const NOTE_SALE_TASKS: &[TaskTypeSpec] = &[
    task("potential_note_sale", "Potential Note Sale", Tone::Info, &[]),
    task("out_to_market", "Out to Market", Tone::Info, &[
        field("bid_deadline", "Bid Deadline", FieldKind::Date),
    ]),
    task("pending_sale", "Pending Sale", Tone::Brand, &[
        field("proposed_price", "Proposed Price", FieldKind::Money),
    ]),
    task("sold", "Sold", Tone::Success, &[
        field("note_sale_price", "Sale Price", FieldKind::Money),
        field("sale_date", "Sale Date", FieldKind::Date),
    ]),
];

impl OutcomeKind {
    /// Task types in workflow order.
    pub fn task_types(self) -> &'static [TaskTypeSpec] {
        match self {
            OutcomeKind::Foreclosure => FORECLOSURE_TASKS,
            OutcomeKind::Reo => REO_TASKS,
            OutcomeKind::Dil => DIL_TASKS,
            OutcomeKind::ShortSale => SHORT_SALE_TASKS,
            OutcomeKind::Modification => MODIFICATION_TASKS,
            OutcomeKind::NoteSale => NOTE_SALE_TASKS,
        }
    }

    pub fn task_type(self, code: &str) -> Option<&'static TaskTypeSpec> {
        self.task_types().iter().find(|t| t.code == code)
    }

    /// Label for a task type code; unknown codes are shown as-is.
    pub fn task_label(self, code: &str) -> String {
        self.task_type(code)
            .map(|t| t.label.to_string())
            .unwrap_or_else(|| code.to_string())
    }

    /// Position of a code in the workflow, unknown codes sort last.
    pub fn task_order(self, code: &str) -> usize {
        self.task_types()
            .iter()
            .position(|t| t.code == code)
            .unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_outcome_has_unique_task_codes() {
        for kind in OutcomeKind::ALL {
            let types = kind.task_types();
            assert!(!types.is_empty(), "{:?} has no task types", kind);
            let codes: HashSet<_> = types.iter().map(|t| t.code).collect();
            assert_eq!(codes.len(), types.len(), "{:?} repeats a task code", kind);
        }
    }

    #[test]
    fn test_extra_field_keys_do_not_shadow_core_fields() {
        let reserved = ["id", "asset_hub", "asset_hub_id", "task_type", "task_started", "notes"];
        for kind in OutcomeKind::ALL {
            for t in kind.task_types() {
                for f in t.extra_fields {
                    assert!(!reserved.contains(&f.key), "{} reuses {}", t.code, f.key);
                }
            }
        }
    }

    #[test]
    fn test_lookup_and_order() {
        let kind = OutcomeKind::Reo;
        assert_eq!(kind.task_label("marketing"), "Marketing");
        assert_eq!(kind.task_label("legacy_code"), "legacy_code");
        assert!(kind.task_order("eviction") < kind.task_order("sold"));
        assert_eq!(kind.task_order("legacy_code"), usize::MAX);
        assert_eq!(kind.task_type("sold").map(|t| t.tone), Some(Tone::Success));
    }
}
