use ballast_config::BallastConfig;
use ballast_core::entities::{Task, TimeLog, User};
use ballast_core::enums::{Priority, TaskStatus};
use ballast_core::snapshot::Snapshot;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::context::AppContext;

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap()
}

fn user(id: u64, name: &str) -> User {
    User {
        user_id: id,
        name: name.into(),
        role: "engineer".into(),
    }
}

fn task(id: u64, owner: u64, status: TaskStatus, priority: Priority, due_in_hours: i64) -> Task {
    Task {
        task_id: id,
        title: format!("task-{id}"),
        assigned_user_id: owner,
        status,
        priority,
        due_date: now() + Duration::hours(due_in_hours),
    }
}

/// Ada scores 10, Grace 2, Linus 8, Mae 0.
pub fn team_snapshot() -> Snapshot {
    Snapshot {
        users: vec![
            user(1, "Ada"),
            user(2, "Grace"),
            user(3, "Linus"),
            user(4, "Mae"),
        ],
        tasks: vec![
            task(100, 1, TaskStatus::Pending, Priority::High, 12),
            task(101, 1, TaskStatus::Done, Priority::Low, -48),
            task(200, 2, TaskStatus::Done, Priority::Medium, -72),
            task(201, 2, TaskStatus::Done, Priority::Medium, -96),
            task(300, 3, TaskStatus::Pending, Priority::Medium, 72),
            task(301, 3, TaskStatus::InProgress, Priority::Low, 96),
        ],
        time_logs: vec![TimeLog::minutes(1, 300.0)],
        dependencies: Vec::new(),
        notifications: Vec::new(),
    }
}

pub fn team_context() -> AppContext {
    AppContext::from_parts(BallastConfig::default(), team_snapshot())
}
