//! Read-side view layer.
//!
//! # Responsibility
//! - Derive flat and grouped projections from a store snapshot.
//! - Hold transient UI selections (filters, view mode, edit target)
//!   outside the authoritative store.
//!
//! # Invariants
//! - Projections are pure: same snapshot + same selections, same output.
//! - View state never reaches into the store; mode toggles and filter
//!   changes have no effect on task data.

pub mod projector;
pub mod state;
