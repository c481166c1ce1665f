//! Reading the input tables from a JSON snapshot file.

use std::path::Path;

use ballast_core::errors::CoreError;
use ballast_core::snapshot::Snapshot;

/// Read, parse, and validate a snapshot file.
///
/// An unreadable or malformed file is `DataUnavailable`; a well-formed file
/// with duplicate keys or invalid time logs is `Validation`.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, CoreError> {
    let raw = std::fs::read_to_string(path).map_err(|error| {
        CoreError::DataUnavailable(format!("cannot read {}: {error}", path.display()))
    })?;

    let snapshot: Snapshot = serde_json::from_str(&raw).map_err(|error| {
        CoreError::DataUnavailable(format!("cannot parse {}: {error}", path.display()))
    })?;

    snapshot.validate()?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_snapshot(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write snapshot");
        file
    }

    #[test]
    fn missing_tables_default_to_empty() {
        let file = write_snapshot(r#"{"users": [{"user_id": 1, "name": "Ada", "role": "lead"}]}"#);
        let snapshot = load_snapshot(file.path()).expect("snapshot loads");
        assert_eq!(snapshot.users.len(), 1);
        assert!(snapshot.tasks.is_empty());
        assert!(snapshot.notifications.is_empty());
    }

    #[test]
    fn full_snapshot_parses() {
        let file = write_snapshot(
            r#"{
                "users": [{"user_id": 1, "name": "Ada", "role": "lead"}],
                "tasks": [{
                    "task_id": 10, "title": "Ship", "assigned_user_id": 1,
                    "status": "in_progress", "priority": "high",
                    "due_date": "2026-11-01T17:00:00Z"
                }],
                "time_logs": [{"user_id": 1, "duration_minutes": 90.0}],
                "dependencies": [{"task_id": 10, "depends_on_task_id": 9}],
                "notifications": [{"user_id": 1, "task_id": 10, "type": "reminder"}]
            }"#,
        );
        let snapshot = load_snapshot(file.path()).expect("snapshot loads");
        assert_eq!(snapshot.tasks[0].task_id, 10);
        assert_eq!(snapshot.dependencies[0].depends_on_task_id, 9);
        assert_eq!(snapshot.notifications[0].reminder_key(), Some((1, 10)));
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_snapshot(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CoreError::DataUnavailable(_)));
    }

    #[test]
    fn malformed_json_is_data_unavailable() {
        let file = write_snapshot("{\"users\": [");
        let err = load_snapshot(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::DataUnavailable(_)));
    }

    #[test]
    fn duplicate_user_is_validation_error() {
        let file = write_snapshot(
            r#"{"users": [
                {"user_id": 1, "name": "Ada", "role": "lead"},
                {"user_id": 1, "name": "Ada again", "role": "lead"}
            ]}"#,
        );
        let err = load_snapshot(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
