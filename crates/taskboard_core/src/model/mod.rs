//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its closed enums.
//! - Keep field-level validation next to the data it protects.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - `priority` and `state` can only hold their enumerated values.

pub mod task;
