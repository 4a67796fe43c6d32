//! Networking for the planner HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `PlannerApi` seam and its browser implementation.
//! Controllers in `state` are generic over that trait so tests can swap in
//! `fake::FakeApi`.

pub mod api;
#[cfg(test)]
pub(crate) mod fake;
