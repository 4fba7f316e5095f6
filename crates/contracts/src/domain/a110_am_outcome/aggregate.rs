use super::config::{ExtraField, FieldKind};
use super::kind::OutcomeKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A subtask of an outcome (`/am/outcomes/{slug}-tasks/`).
///
/// The record is owned by the server: the client re-reads the list after every
/// create/patch/delete instead of merging its own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeTask {
    pub id: i64,
    #[serde(default)]
    pub asset_hub: Option<i64>,
    pub task_type: String,
    /// ISO date (or datetime) the task was started
    #[serde(default)]
    pub task_started: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Type-specific fields, see [`super::config::TaskTypeSpec::extra_fields`]
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl OutcomeTask {
    /// Display text of an extra field; missing and null values are empty.
    pub fn extra_text(&self, field: &ExtraField) -> String {
        match self.extra.get(field.key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => match field.kind {
                FieldKind::Money | FieldKind::Percent => {
                    n.as_f64().map(format_plain).unwrap_or_default()
                }
                _ => n.to_string(),
            },
            Some(other) => other.to_string(),
        }
    }
}

fn format_plain(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}

/// Body of `POST /am/outcomes/{slug}-tasks/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOutcomeTaskDto {
    pub asset_hub_id: i64,
    pub task_type: String,
    pub task_started: String,
}

/// Body of `PATCH /am/outcomes/{slug}-tasks/{id}/`: only the changed fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchOutcomeTaskDto(pub Map<String, Value>);

impl PatchOutcomeTaskDto {
    pub fn notes(notes: &str) -> Self {
        let mut map = Map::new();
        map.insert("notes".to_string(), Value::String(notes.to_string()));
        Self(map)
    }

    /// Empty input clears the start date.
    pub fn task_started(date: &str) -> Self {
        let trimmed = date.trim();
        let value = if trimmed.is_empty() {
            Value::Null
        } else {
            Value::String(trimmed.to_string())
        };
        let mut map = Map::new();
        map.insert("task_started".to_string(), value);
        Self(map)
    }

    /// Converts typed input into the JSON value the backend stores for the
    /// field. Empty input clears the field. `None` when a money/percent value
    /// does not parse, so the caller can skip the save.
    pub fn extra_field(field: &ExtraField, input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let value = if trimmed.is_empty() {
            Value::Null
        } else {
            match field.kind {
                FieldKind::Money | FieldKind::Percent => {
                    let n = crate::shared::money::parse_money_input(trimmed)?;
                    Value::from(n)
                }
                FieldKind::Date | FieldKind::Text => Value::String(trimmed.to_string()),
            }
        };
        let mut map = Map::new();
        map.insert(field.key.to_string(), value);
        Some(Self(map))
    }
}

/// Path segment of the task collection of an outcome: `"{slug}-tasks"`.
pub fn tasks_collection(kind: OutcomeKind) -> String {
    format!("{}-tasks", kind.slug())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_PRICE: ExtraField = ExtraField {
        key: "list_price",
        label: "List Price",
        kind: FieldKind::Money,
    };

    #[test]
    fn test_task_keeps_type_specific_fields() {
        let task: OutcomeTask = serde_json::from_str(
            r#"{"id": 3, "asset_hub": 9, "task_type": "marketing", "task_started": "2025-02-01", "list_price": 125000.0}"#,
        )
        .unwrap();
        assert_eq!(task.id, 3);
        assert_eq!(task.task_type, "marketing");
        assert_eq!(task.extra_text(&LIST_PRICE), "125000");
        assert_eq!(task.notes, None);
    }

    #[test]
    fn test_patch_money_field() {
        let patch = PatchOutcomeTaskDto::extra_field(&LIST_PRICE, "$1,234").unwrap();
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({ "list_price": 1234.0 })
        );
        assert!(PatchOutcomeTaskDto::extra_field(&LIST_PRICE, "soon").is_none());
    }

    #[test]
    fn test_patch_empty_clears() {
        let patch = PatchOutcomeTaskDto::extra_field(&LIST_PRICE, "  ").unwrap();
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({ "list_price": null })
        );
    }

    #[test]
    fn test_patch_task_started() {
        assert_eq!(
            serde_json::to_string(&PatchOutcomeTaskDto::task_started("2025-03-01")).unwrap(),
            r#"{"task_started":"2025-03-01"}"#
        );
        assert_eq!(
            serde_json::to_string(&PatchOutcomeTaskDto::task_started("")).unwrap(),
            r#"{"task_started":null}"#
        );
    }

    #[test]
    fn test_collection_path() {
        assert_eq!(tasks_collection(OutcomeKind::ShortSale), "short-sale-tasks");
    }
}
