//! Taskweave: task lifecycle and recurrence core.
//!
//! This crate provides the behavioural core of a task-management system:
//! owner-scoped tasks with a reversible pending/completed lifecycle, an
//! append-only audit history, and automatic regeneration of recurring tasks
//! on completion. Authentication, HTTP routing, and serialization to a wire
//! format are left to outer layers.
//!
//! # Architecture
//!
//! Taskweave follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, recurrence, categories, and history

pub mod task;
