use leptos::reactive::owner::Owner;

use super::*;

#[test]
fn history_row_builds_with_prompt_as_label_and_tooltip() {
    Owner::new().with(|| {
        let history = RwSignal::new(HistoryIndex::default());
        let entry = HistoryEntry {
            id: "1".into(),
            session_id: "s1".into(),
            prompt: "summarize the policy".into(),
        };
        let _row = HistoryRow(HistoryRowProps::builder().entry(entry).history(history).build());
        assert_eq!(history.get_untracked().active_session_id(), None);
    });
}
