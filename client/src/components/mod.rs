//! Reusable UI components for the planner pages.
//!
//! ARCHITECTURE
//! ============
//! Components render state from `crate::state` and call its controllers;
//! browser side effects go through `crate::util`.

pub mod camera_widget;
pub mod chat_widget;
pub mod plan_form;
pub mod plan_results;
pub mod topic_field;
