use std::collections::BTreeSet;

use contracts::domain::a110_am_outcome::{
    CreateOutcomeTaskDto, OutcomeKind, OutcomeTask, TaskTypeSpec,
};

/// Client view of one outcome's task list for one asset hub.
///
/// `tasks` is only ever replaced wholesale from a server response.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskBoard {
    pub kind: OutcomeKind,
    pub tasks: Vec<OutcomeTask>,
    expanded: BTreeSet<i64>,
    pending_delete: Option<i64>,
}

impl TaskBoard {
    pub fn new(kind: OutcomeKind) -> Self {
        Self {
            kind,
            tasks: Vec::new(),
            expanded: BTreeSet::new(),
            pending_delete: None,
        }
    }

    /// Current server copy of one task.
    pub fn task(&self, task_id: i64) -> Option<OutcomeTask> {
        self.tasks.iter().find(|t| t.id == task_id).cloned()
    }

    pub fn has_type(&self, code: &str) -> bool {
        self.tasks.iter().any(|t| t.task_type == code)
    }

    /// Known type that is not on the board yet.
    pub fn can_add(&self, code: &str) -> bool {
        self.kind.task_type(code).is_some() && !self.has_type(code)
    }

    /// Every configured type with whether it can still be added.
    pub fn add_options(&self) -> Vec<(&'static TaskTypeSpec, bool)> {
        self.kind
            .task_types()
            .iter()
            .map(|spec| (spec, !self.has_type(spec.code)))
            .collect()
    }

    /// Body of the POST, or `None` when nothing may be sent: the picker's
    /// empty entry, an unknown type or one already on the board.
    pub fn plan_add(
        &self,
        asset_hub_id: i64,
        code: &str,
        started: String,
    ) -> Option<CreateOutcomeTaskDto> {
        self.can_add(code).then(|| CreateOutcomeTaskDto {
            asset_hub_id,
            task_type: code.to_string(),
            task_started: started,
        })
    }

    /// Takes the server's list: workflow order, stale expand/delete state dropped.
    pub fn replace_tasks(&mut self, mut tasks: Vec<OutcomeTask>) {
        let kind = self.kind;
        tasks.sort_by_key(|t| (kind.task_order(&t.task_type), t.id));
        self.expanded.retain(|id| tasks.iter().any(|t| t.id == *id));
        if let Some(id) = self.pending_delete {
            if !tasks.iter().any(|t| t.id == id) {
                self.pending_delete = None;
            }
        }
        self.tasks = tasks;
    }

    pub fn toggle_expanded(&mut self, task_id: i64) {
        if !self.expanded.remove(&task_id) {
            self.expanded.insert(task_id);
        }
    }

    /// Everything is open unless the master collapse is on.
    pub fn is_expanded(&self, task_id: i64, master_collapsed: bool) -> bool {
        !master_collapsed || self.expanded.contains(&task_id)
    }

    pub fn request_delete(&mut self, task_id: i64) -> bool {
        if self.tasks.iter().any(|t| t.id == task_id) {
            self.pending_delete = Some(task_id);
            true
        } else {
            false
        }
    }

    /// The id to DELETE once the user confirmed.
    pub fn confirm_delete(&mut self) -> Option<i64> {
        self.pending_delete.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, task_type: &str) -> OutcomeTask {
        OutcomeTask {
            id,
            asset_hub: Some(9),
            task_type: task_type.to_string(),
            task_started: Some("2025-01-10".to_string()),
            notes: None,
            extra: Default::default(),
        }
    }

    fn reo_board() -> TaskBoard {
        let mut board = TaskBoard::new(OutcomeKind::Reo);
        board.replace_tasks(vec![task(5, "marketing"), task(2, "eviction")]);
        board
    }

    #[test]
    fn existing_type_cannot_be_added() {
        let board = reo_board();
        assert!(board.plan_add(9, "eviction", "2025-02-01".into()).is_none());
        assert!(!board.can_add("eviction"));

        let dto = board.plan_add(9, "renovation", "2025-02-01".into()).unwrap();
        assert_eq!(dto.task_type, "renovation");
        assert_eq!(dto.asset_hub_id, 9);
    }

    #[test]
    fn unknown_type_cannot_be_added() {
        assert!(reo_board().plan_add(9, "nod_noi", "2025-02-01".into()).is_none());
    }

    #[test]
    fn empty_pick_sends_nothing() {
        assert!(reo_board().plan_add(9, "", "2025-02-01".into()).is_none());
    }

    #[test]
    fn refetched_content_replaces_local_copy() {
        let mut board = reo_board();
        assert_eq!(board.task(5).and_then(|t| t.task_started), Some("2025-01-10".into()));

        let mut saved = task(5, "marketing");
        saved.task_started = Some("2024-01-01".into());
        saved.notes = Some("listed with agent".into());
        board.replace_tasks(vec![saved, task(2, "eviction")]);

        let seen = board.task(5).unwrap();
        assert_eq!(seen.task_started.as_deref(), Some("2024-01-01"));
        assert_eq!(seen.notes.as_deref(), Some("listed with agent"));
        assert_eq!(board.task(99), None);
    }

    #[test]
    fn add_options_flag_present_types() {
        let board = reo_board();
        let options = board.add_options();
        assert_eq!(options.len(), OutcomeKind::Reo.task_types().len());
        let eviction = options.iter().find(|(s, _)| s.code == "eviction").unwrap();
        assert!(!eviction.1);
        let sold = options.iter().find(|(s, _)| s.code == "sold").unwrap();
        assert!(sold.1);
    }

    #[test]
    fn tasks_follow_workflow_order() {
        let board = reo_board();
        let types: Vec<_> = board.tasks.iter().map(|t| t.task_type.as_str()).collect();
        assert_eq!(types, vec!["eviction", "marketing"]);
    }

    #[test]
    fn deleted_task_is_gone_after_refetch() {
        let mut board = reo_board();
        assert!(board.request_delete(5));
        assert_eq!(board.confirm_delete(), Some(5));
        assert_eq!(board.confirm_delete(), None);

        board.replace_tasks(vec![task(2, "eviction")]);
        assert!(board.tasks.iter().all(|t| t.id != 5));
    }

    #[test]
    fn delete_of_unknown_id_is_refused() {
        let mut board = reo_board();
        assert!(!board.request_delete(99));
        assert_eq!(board.confirm_delete(), None);
    }

    #[test]
    fn master_collapse_controls_expansion() {
        let mut board = reo_board();
        assert!(board.is_expanded(2, false));
        assert!(!board.is_expanded(2, true));

        board.toggle_expanded(2);
        assert!(board.is_expanded(2, true));
        board.toggle_expanded(2);
        assert!(!board.is_expanded(2, true));
    }

    #[test]
    fn refetch_prunes_stale_expanded_ids() {
        let mut board = reo_board();
        board.toggle_expanded(5);
        board.replace_tasks(vec![task(2, "eviction")]);
        board.replace_tasks(vec![task(2, "eviction"), task(5, "marketing")]);
        assert!(!board.is_expanded(5, true));
    }
}
