//! Task lifecycle and recurrence management.
//!
//! This module implements owner-scoped task records with a two-state
//! lifecycle (pending, completed), an append-only history log of lifecycle
//! events, collaborator pairings, categories, and automatic regeneration of
//! recurring tasks on completion. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
