//! Due-date reminder scheduling.
//!
//! A task becomes due for a reminder `lead` before its due date. Reminders
//! already on record for the same (owner, task) pair are not repeated, which
//! is also what keeps freshly reminded tasks out of reallocation plans.

use std::collections::HashSet;

use ballast_core::entities::{Notification, Task};
use ballast_core::ids::{TaskId, UserId};
use chrono::{DateTime, Duration, Utc};

/// Default lead time before a due date at which a reminder is sent.
pub const DEFAULT_LEAD_HOURS: i64 = 24;

/// Reminders that should go out at `now`, earliest due first.
///
/// Covers every unfinished task whose reminder time (`due_date - lead`) has
/// been reached, including overdue ones, unless its owner already has a
/// reminder for it. Nothing is recorded; the caller persists what it sends.
#[must_use]
pub fn due_reminders(
    tasks: &[Task],
    notifications: &[Notification],
    now: DateTime<Utc>,
    lead: Duration,
) -> Vec<Notification> {
    let already_sent: HashSet<(UserId, TaskId)> = notifications
        .iter()
        .filter_map(Notification::reminder_key)
        .collect();

    let mut due: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.is_pending())
        .filter(|task| reminder_time_reached(task, now, lead))
        .filter(|task| !already_sent.contains(&(task.assigned_user_id, task.task_id)))
        .collect();
    due.sort_by_key(|task| (task.due_date, task.task_id));

    tracing::debug!(
        %now,
        lead_hours = lead.num_hours(),
        reminders = due.len(),
        "scheduled due-date reminders"
    );

    due.into_iter()
        .map(|task| Notification::reminder(task.assigned_user_id, task.task_id))
        .collect()
}

/// `due_date - lead <= now`. A lead reaching past the earliest representable
/// time counts as reached.
fn reminder_time_reached(task: &Task, now: DateTime<Utc>, lead: Duration) -> bool {
    task.due_date
        .checked_sub_signed(lead)
        .is_none_or(|remind_at| remind_at <= now)
}

#[cfg(test)]
mod tests {
    use ballast_core::enums::{NotificationType, Priority, TaskStatus};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap()
    }

    fn task(id: TaskId, owner: UserId, status: TaskStatus, due: DateTime<Utc>) -> Task {
        Task {
            task_id: id,
            title: format!("task-{id}"),
            assigned_user_id: owner,
            status,
            priority: Priority::Medium,
            due_date: due,
        }
    }

    fn lead() -> Duration {
        Duration::hours(DEFAULT_LEAD_HOURS)
    }

    #[test]
    fn task_within_lead_gets_a_reminder() {
        let tasks = vec![task(1, 5, TaskStatus::Pending, now() + Duration::hours(20))];
        let reminders = due_reminders(&tasks, &[], now(), lead());
        assert_eq!(reminders, vec![Notification::reminder(5, 1)]);
    }

    #[test]
    fn task_beyond_lead_is_not_due_yet() {
        let tasks = vec![task(1, 5, TaskStatus::Pending, now() + Duration::hours(30))];
        assert!(due_reminders(&tasks, &[], now(), lead()).is_empty());
    }

    #[test]
    fn boundary_is_inclusive() {
        let tasks = vec![task(1, 5, TaskStatus::Pending, now() + lead())];
        assert_eq!(due_reminders(&tasks, &[], now(), lead()).len(), 1);
    }

    #[test]
    fn overdue_tasks_are_included() {
        let tasks = vec![task(1, 5, TaskStatus::InProgress, now() - Duration::days(3))];
        assert_eq!(due_reminders(&tasks, &[], now(), lead()).len(), 1);
    }

    #[test]
    fn enormous_lead_reaches_every_open_task() {
        let tasks = vec![
            task(1, 5, TaskStatus::Pending, now() + Duration::days(365 * 50)),
            task(2, 5, TaskStatus::Done, now() + Duration::days(1)),
        ];
        let lead = Duration::try_hours(10_000_000_000).unwrap();
        let reminders = due_reminders(&tasks, &[], now(), lead);
        assert_eq!(reminders, vec![Notification::reminder(5, 1)]);
    }

    #[test]
    fn done_tasks_are_skipped() {
        let tasks = vec![task(1, 5, TaskStatus::Done, now())];
        assert!(due_reminders(&tasks, &[], now(), lead()).is_empty());
    }

    #[test]
    fn existing_reminder_is_not_repeated() {
        let tasks = vec![
            task(1, 5, TaskStatus::Pending, now()),
            task(2, 5, TaskStatus::Pending, now()),
        ];
        let sent = vec![
            Notification::reminder(5, 1),
            Notification {
                user_id: 5,
                task_id: 2,
                kind: NotificationType::Overdue,
            },
        ];
        let reminders = due_reminders(&tasks, &sent, now(), lead());
        assert_eq!(reminders, vec![Notification::reminder(5, 2)]);
    }

    #[test]
    fn reminders_are_ordered_by_due_date_then_id() {
        let tasks = vec![
            task(3, 1, TaskStatus::Pending, now() + Duration::hours(2)),
            task(2, 1, TaskStatus::Pending, now() + Duration::hours(1)),
            task(1, 2, TaskStatus::Pending, now() + Duration::hours(2)),
        ];
        let order: Vec<TaskId> = due_reminders(&tasks, &[], now(), lead())
            .iter()
            .map(|n| n.task_id)
            .collect();
        assert_eq!(order, vec![2, 1, 3]);
    }
}
