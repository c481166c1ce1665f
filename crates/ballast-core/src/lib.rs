//! # ballast-core
//!
//! Core types and error types for Ballast.
//!
//! This crate provides the foundational types shared across all Ballast crates:
//! - Entity structs for the input tables (users, tasks, time logs, dependencies, notifications)
//! - Status, priority, and notification enums
//! - Id aliases
//! - Cross-cutting error types
//! - The snapshot envelope that bundles the input tables
//! - Derived response types (workload entries, reallocation suggestions, reports)

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod snapshot;
