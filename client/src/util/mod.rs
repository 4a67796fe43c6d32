//! Browser helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `web-sys` directly lives here behind the `csr`
//! feature, so pages and components stay free of DOM plumbing and native
//! builds compile to no-ops.

pub mod dom;
pub mod media;
