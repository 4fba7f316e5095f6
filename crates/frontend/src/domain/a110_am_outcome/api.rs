use contracts::domain::a110_am_outcome::{
    tasks_collection, CreateOutcomeTaskDto, OutcomeKind, OutcomeTask, PatchOutcomeTaskDto,
};
use gloo_net::http::Request;
use serde::Serialize;

use crate::shared::api_utils::{api_url, ensure_ok, get_json};

#[derive(Serialize)]
struct TaskListQuery {
    asset_hub_id: i64,
}

fn collection_path(kind: OutcomeKind) -> String {
    format!("/am/outcomes/{}/", tasks_collection(kind))
}

fn item_path(kind: OutcomeKind, task_id: i64) -> String {
    format!("/am/outcomes/{}/{}/", tasks_collection(kind), task_id)
}

pub async fn list_tasks(kind: OutcomeKind, asset_hub_id: i64) -> Result<Vec<OutcomeTask>, String> {
    let query = serde_qs::to_string(&TaskListQuery { asset_hub_id })
        .map_err(|e| format!("Failed to encode query: {}", e))?;
    get_json(&format!("{}?{}", collection_path(kind), query)).await
}

pub async fn create_task(kind: OutcomeKind, dto: CreateOutcomeTaskDto) -> Result<OutcomeTask, String> {
    let response = Request::post(&api_url(&collection_path(kind)))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    ensure_ok(&response)?;

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn patch_task(
    kind: OutcomeKind,
    task_id: i64,
    dto: PatchOutcomeTaskDto,
) -> Result<(), String> {
    let response = Request::patch(&api_url(&item_path(kind, task_id)))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    ensure_ok(&response)
}

pub async fn delete_task(kind: OutcomeKind, task_id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&item_path(kind, task_id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    ensure_ok(&response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_keep_trailing_slash() {
        assert_eq!(collection_path(OutcomeKind::Reo), "/am/outcomes/reo-tasks/");
        assert_eq!(
            item_path(OutcomeKind::NoteSale, 7),
            "/am/outcomes/note-sale-tasks/7/"
        );
    }

    #[test]
    fn list_query() {
        assert_eq!(
            serde_qs::to_string(&TaskListQuery { asset_hub_id: 9 }).unwrap(),
            "asset_hub_id=9"
        );
    }
}
