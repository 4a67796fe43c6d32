//! Per-widget state and the controllers that drive it.
//!
//! DESIGN
//! ======
//! Each widget owns one state struct, held in a signal created by that
//! widget's component. The async controller functions here are generic over
//! `PlannerApi`; they return plain outcomes and leave signal updates to the
//! caller, so they run unchanged under a fake API in tests.

pub mod camera;
pub mod chat;
pub mod login;
pub mod plan;
pub mod settings;
pub mod suggest;
