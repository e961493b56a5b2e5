//! Store layer: the single source of truth for the task collection.
//!
//! # Responsibility
//! - Define the mutation contract every store implementation honors.
//! - Keep all task mutation behind four operations plus their checked
//!   companions; consumers only ever see read-only snapshots.
//!
//! # Invariants
//! - Insertion order is preserved across updates and transitions.
//! - The silent operations and their `try_` companions differ only in
//!   how a missing id is surfaced.

pub mod task_store;
