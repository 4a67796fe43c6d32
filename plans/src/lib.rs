//! Study-plan domain model shared by the browser client and the CLI.
//!
//! This crate owns the wire DTOs for the planner HTTP API plus every piece of
//! client behavior that can be expressed without a DOM or a network: form
//! normalization, login validation, the result → view-model transform, the
//! chat conversation state machine, suggestion debounce bookkeeping, capture
//! loop decisions, and the settings form model.
//!
//! Nothing here performs I/O. Callers (`client`, `cli`) own transport and
//! rendering and feed results back into these pure functions.

pub mod capture;
pub mod chat;
pub mod endpoints;
pub mod form;
pub mod login;
pub mod settings;
pub mod suggest;
pub mod types;
pub mod view;

pub use form::{FormError, FormFields};
pub use login::{Credentials, LoginError};
pub use types::{
    CalendarEvent, CalendarInfo, ExpressionResult, LoginResponse, Milestone, Resource,
    StudyPlanRequest, StudyPlanResult,
};
pub use view::PlanView;
