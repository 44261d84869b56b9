use task_tracker::{DeadlineOrder, TaskKind, TaskStore, TrackerError};
use tempfile::TempDir;

fn names(store: &TaskStore) -> Vec<String> {
    store.list().map(|t| t.name().to_string()).collect()
}

#[test]
fn valid_input_appears_exactly_once() {
    let mut store = TaskStore::new();

    for priority in 1..=5 {
        let name = format!("task-{priority}");
        store.add(&name, "07-07-2024", priority).unwrap();
        assert_eq!(store.list().filter(|t| t.name() == name).count(), 1);
    }

    assert_eq!(store.len(), 5);
}

#[test]
fn invalid_input_leaves_collection_unchanged() {
    let mut store = TaskStore::new();
    store.add("keep", "01-01-2024", 3).unwrap();

    let cases: &[(&str, i64)] = &[
        ("01-01-2024", 0),
        ("01-01-2024", 6),
        ("32-01-2024", 3),
        ("2024-01-01", 3),
        ("1-1-2024", 3),
    ];
    for (deadline, priority) in cases {
        let err = store.add("bad", deadline, *priority).unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));
    }

    assert_eq!(names(&store), ["keep"]);
}

#[test]
fn classification_follows_priority() {
    let mut store = TaskStore::new();

    assert_eq!(store.add("a", "01-01-2024", 3).unwrap().kind(), TaskKind::Low);
    assert_eq!(store.add("b", "01-01-2024", 4).unwrap().kind(), TaskKind::High);
}

#[test]
fn string_order_with_priority_tiebreak() {
    let mut store = TaskStore::new();
    store.add("A", "15-01-2024", 3).unwrap();
    store.add("B", "01-02-2024", 5).unwrap();
    store.add("C", "15-01-2024", 5).unwrap();

    // "01-02-2024" < "15-01-2024" as text
    assert_eq!(names(&store), ["B", "C", "A"]);
}

#[test]
fn calendar_order_with_priority_tiebreak() {
    let mut store = TaskStore::with_order(DeadlineOrder::Chronological);
    store.add("A", "15-01-2024", 3).unwrap();
    store.add("B", "01-02-2024", 5).unwrap();
    store.add("C", "15-01-2024", 5).unwrap();

    assert_eq!(names(&store), ["C", "A", "B"]);
}

#[test]
fn sorted_after_every_add() {
    let mut store = TaskStore::new();
    let inputs = [
        ("e", "28-12-2023", 2),
        ("f", "03-03-2025", 5),
        ("g", "03-03-2025", 1),
        ("h", "10-10-2010", 4),
        ("i", "28-12-2023", 4),
    ];

    for (name, deadline, priority) in inputs {
        store.add(name, deadline, priority).unwrap();

        let tasks: Vec<_> = store.list().collect();
        for pair in tasks.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(
                a.deadline() < b.deadline()
                    || (a.deadline() == b.deadline() && a.priority() >= b.priority())
            );
        }
    }
}

#[test]
fn update_status_changes_only_status() {
    let mut store = TaskStore::new();
    store.add("X", "05-05-2024", 2).unwrap();
    store.add("Y", "04-05-2024", 2).unwrap();
    let before = names(&store);

    store.update_status("X", "Completed").unwrap();

    let x = store.get("X").unwrap();
    assert_eq!(x.status(), "Completed");
    assert_eq!(x.deadline().as_str(), "05-05-2024");
    assert_eq!(x.priority().value(), 2);
    assert_eq!(names(&store), before);

    let err = store.update_status("Z", "Completed").unwrap_err();
    assert!(matches!(err, TrackerError::NotFound(_)));
    assert_eq!(store.get("Y").unwrap().status(), "Pending");
}

#[test]
fn delete_removes_exactly_one() {
    let mut store = TaskStore::new();
    store.add("X", "05-05-2024", 2).unwrap();
    store.add("X", "05-05-2024", 2).unwrap();
    store.add("Y", "06-05-2024", 2).unwrap();

    store.delete("X").unwrap();
    assert_eq!(store.len(), 2);

    store.delete("X").unwrap();
    assert_eq!(store.len(), 1);

    assert!(matches!(
        store.delete("X").unwrap_err(),
        TrackerError::NotFound(_)
    ));
    assert_eq!(names(&store), ["Y"]);
}

#[test]
fn duplicates_only_touch_first_match() {
    let mut store = TaskStore::new();
    store.add("same", "02-02-2024", 1).unwrap();
    store.add("same", "01-02-2024", 1).unwrap();

    store.update_status("same", "Completed").unwrap();
    let statuses: Vec<_> = store.list().map(|t| t.status().to_string()).collect();
    assert_eq!(statuses, ["Completed", "Pending"]);

    store.delete("same").unwrap();
    assert_eq!(store.get("same").unwrap().deadline().as_str(), "02-02-2024");
}

#[tokio::test]
async fn export_writes_flat_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tasks.txt");

    let mut store = TaskStore::new();
    store.add("Alice", "01-01-2024", 2).unwrap();
    store.export_to_file(&path).await.unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Alice,01-01-2024,Pending,2\n"
    );
}

#[tokio::test]
async fn export_of_empty_store_truncates() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tasks.txt");
    std::fs::write(&path, "stale\n").unwrap();

    TaskStore::new().export_to_file(&path).await.unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}

#[tokio::test]
async fn export_to_directory_is_io_error() {
    let temp_dir = TempDir::new().unwrap();

    let mut store = TaskStore::new();
    store.add("Alice", "01-01-2024", 2).unwrap();

    let err = store.export_to_file(temp_dir.path()).await.unwrap_err();
    assert!(matches!(err, TrackerError::Io(_)));
    assert_eq!(store.len(), 1);
}
