//! Identifier types.
//!
//! Ids are plain integers as they arrive from the source tables. They are
//! only compared and hashed, never generated here.

/// Primary key of a [`User`](crate::entities::User).
pub type UserId = u64;

/// Primary key of a [`Task`](crate::entities::Task).
pub type TaskId = u64;
