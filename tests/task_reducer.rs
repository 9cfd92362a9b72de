use taskdeck::images::ImageRecord;
use taskdeck::tasks::{
    normalize_reply, AppIntent, AppReducer, AppState, Priority, RequestId, RequestKind, TaskId,
    TaskRef,
};
use taskdeck::ui::mvi::Reducer;

fn reduce_all(intents: impl IntoIterator<Item = AppIntent>) -> AppState {
    intents
        .into_iter()
        .fold(AppState::default(), AppReducer::reduce)
}

fn descriptions(state: &AppState) -> Vec<&str> {
    state.tasks.iter().map(|t| t.description.as_str()).collect()
}

#[test]
fn test_add_task_grows_list_and_keeps_it_sorted() {
    let priorities = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Low,
        Priority::High,
        Priority::Medium,
    ];
    let mut state = AppState::default();
    for (i, priority) in priorities.into_iter().enumerate() {
        let before = state.tasks.len();
        state = AppReducer::reduce(state, AppIntent::add_task(format!("task {i}"), priority));
        assert_eq!(state.tasks.len(), before + 1);
        assert!(state.is_sorted_by_priority());
    }
}

#[test]
fn test_add_task_ties_keep_insertion_order() {
    let state = reduce_all([
        AppIntent::add_task("first", Priority::Medium),
        AppIntent::add_task("urgent", Priority::High),
        AppIntent::add_task("second", Priority::Medium),
        AppIntent::add_task("third", Priority::Medium),
    ]);
    assert_eq!(descriptions(&state), ["urgent", "first", "second", "third"]);
}

#[test]
fn test_write_report_then_urgent_fix() {
    let state = reduce_all([
        AppIntent::login("alice"),
        AppIntent::add_task("write report", Priority::Low),
        AppIntent::add_task("urgent fix", Priority::High),
    ]);
    assert_eq!(descriptions(&state), ["urgent fix", "write report"]);
    assert_eq!(state.tasks[0].priority, Priority::High);
    assert_eq!(state.tasks[1].priority, Priority::Low);
}

#[test]
fn test_task_ids_are_unique_and_stable_across_sorting() {
    let state = reduce_all([
        AppIntent::add_task("a", Priority::Low),
        AppIntent::add_task("b", Priority::High),
        AppIntent::add_task("c", Priority::Medium),
    ]);
    let a = state.tasks.iter().find(|t| t.description == "a").map(|t| t.id);
    assert_eq!(a, Some(TaskId(1)));
    assert_eq!(state.task(TaskId(2)).map(|t| t.description.as_str()), Some("b"));

    let mut ids: Vec<u64> = state.tasks.iter().map(|t| t.id.0).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let state = reduce_all([
        AppIntent::add_task("a", Priority::Medium),
        AppIntent::delete_at(0),
        AppIntent::add_task("b", Priority::Medium),
    ]);
    assert_eq!(state.tasks[0].id, TaskId(2));
}

#[test]
fn test_delete_valid_index_removes_exactly_that_task() {
    let state = reduce_all([
        AppIntent::add_task("a", Priority::High),
        AppIntent::add_task("b", Priority::Medium),
        AppIntent::add_task("c", Priority::Low),
    ]);
    let state = AppReducer::reduce(state, AppIntent::delete_at(1));
    assert_eq!(descriptions(&state), ["a", "c"]);
}

#[test]
fn test_delete_out_of_range_is_a_no_op() {
    let state = reduce_all([
        AppIntent::add_task("a", Priority::High),
        AppIntent::add_task("b", Priority::Low),
    ]);
    let after = AppReducer::reduce(state.clone(), AppIntent::delete_at(2));
    assert_eq!(after, state);

    let empty = AppReducer::reduce(AppState::default(), AppIntent::delete_at(0));
    assert_eq!(empty, AppState::default());
}

#[test]
fn test_delete_by_id() {
    let state = reduce_all([
        AppIntent::add_task("a", Priority::Low),
        AppIntent::add_task("b", Priority::High),
    ]);
    let state = AppReducer::reduce(
        state,
        AppIntent::DeleteTask {
            target: TaskRef::Id(TaskId(1)),
        },
    );
    assert_eq!(descriptions(&state), ["b"]);

    let unchanged = AppReducer::reduce(
        state.clone(),
        AppIntent::DeleteTask {
            target: TaskRef::Id(TaskId(99)),
        },
    );
    assert_eq!(unchanged, state);
}

#[test]
fn test_set_priority_resorts() {
    let state = reduce_all([
        AppIntent::add_task("a", Priority::High),
        AppIntent::add_task("b", Priority::Medium),
        AppIntent::add_task("c", Priority::Low),
    ]);
    let state = AppReducer::reduce(state, AppIntent::set_priority_at(2, Priority::High));
    assert_eq!(descriptions(&state), ["a", "c", "b"]);
    assert!(state.is_sorted_by_priority());

    let state = AppReducer::reduce(state, AppIntent::set_priority_at(0, Priority::Low));
    assert_eq!(descriptions(&state), ["c", "b", "a"]);
}

#[test]
fn test_set_priority_out_of_range_keeps_tasks() {
    let state = reduce_all([
        AppIntent::add_task("a", Priority::High),
        AppIntent::add_task("b", Priority::Low),
    ]);
    let after = AppReducer::reduce(state.clone(), AppIntent::set_priority_at(5, Priority::High));
    assert_eq!(after.tasks, state.tasks);
}

#[test]
fn test_set_assistant_reply_normalizes_lines() {
    let state = AppReducer::reduce(
        AppState::default(),
        AppIntent::SetAssistantReply {
            text: "  a  \n\n b \n   \n".to_string(),
        },
    );
    assert_eq!(state.assistant_reply.as_deref(), Some("a\nb"));
    assert_eq!(normalize_reply("   \n\n"), "");
}

#[test]
fn test_set_images_replaces_list() {
    let images = vec![
        ImageRecord::new("1", "https://img/1", "Ana"),
        ImageRecord::new("2", "https://img/2", "Ben"),
    ];
    let state = AppReducer::reduce(
        AppState::default(),
        AppIntent::SetImages {
            images: images.clone(),
        },
    );
    assert_eq!(state.images, images);

    let state = AppReducer::reduce(state, AppIntent::SetImages { images: Vec::new() });
    assert!(state.images.is_empty());
}

#[test]
fn test_set_loading_is_per_kind() {
    let state = AppReducer::reduce(
        AppState::default(),
        AppIntent::SetLoading {
            kind: RequestKind::Images,
            loading: true,
        },
    );
    assert!(state.loading.is_loading(RequestKind::Images));
    assert!(!state.loading.is_loading(RequestKind::Assistant));
    assert!(state.is_loading());

    let state = AppReducer::reduce(
        state,
        AppIntent::SetLoading {
            kind: RequestKind::Images,
            loading: false,
        },
    );
    assert!(!state.is_loading());
}

#[test]
fn test_login_then_logout() {
    let state = AppReducer::reduce(AppState::default(), AppIntent::login("alice"));
    assert!(state.session.authenticated);
    assert_eq!(state.session.username, "alice");

    let state = AppReducer::reduce(state, AppIntent::Logout);
    assert!(!state.session.authenticated);
    assert_eq!(state.session.username, "");
}

#[test]
fn test_logout_keeps_tasks() {
    let state = reduce_all([
        AppIntent::login("alice"),
        AppIntent::add_task("a", Priority::Medium),
        AppIntent::Logout,
    ]);
    assert_eq!(descriptions(&state), ["a"]);
}

#[test]
fn test_overlapping_assistant_requests_latest_wins() {
    let first = RequestId::new();
    let second = RequestId::new();
    let state = reduce_all([
        AppIntent::AssistantRequested { request: first },
        AppIntent::AssistantRequested { request: second },
        AppIntent::AssistantResponded {
            request: first,
            text: "stale".to_string(),
        },
    ]);
    assert!(state.assistant_reply.is_none());
    assert!(state.loading.is_loading(RequestKind::Assistant));

    let state = AppReducer::reduce(
        state,
        AppIntent::AssistantResponded {
            request: second,
            text: " fresh \n".to_string(),
        },
    );
    assert_eq!(state.assistant_reply.as_deref(), Some("fresh"));
    assert!(!state.is_loading());
}

#[test]
fn test_image_request_does_not_touch_assistant_loading() {
    let images = RequestId::new();
    let assistant = RequestId::new();
    let state = reduce_all([
        AppIntent::ImagesRequested { request: images },
        AppIntent::AssistantRequested { request: assistant },
        AppIntent::ImagesResponded {
            request: images,
            images: Some(vec![ImageRecord::new("1", "https://img/1", "Ana")]),
        },
    ]);
    assert!(!state.loading.is_loading(RequestKind::Images));
    assert!(state.loading.is_loading(RequestKind::Assistant));
    assert_eq!(state.images.len(), 1);
}

#[test]
fn test_failed_image_search_keeps_previous_results() {
    let ok = RequestId::new();
    let failed = RequestId::new();
    let state = reduce_all([
        AppIntent::ImagesRequested { request: ok },
        AppIntent::ImagesResponded {
            request: ok,
            images: Some(vec![ImageRecord::new("1", "https://img/1", "Ana")]),
        },
        AppIntent::ImagesRequested { request: failed },
        AppIntent::ImagesResponded {
            request: failed,
            images: None,
        },
    ]);
    assert_eq!(state.images.len(), 1);
    assert!(!state.is_loading());
}
