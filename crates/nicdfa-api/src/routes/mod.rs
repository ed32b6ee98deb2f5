//! # Route Modules
//!
//! Each module defines an Axum Router for one API surface area.
//! Routers are merged into the application in `lib.rs`.

pub mod health;
pub mod info;
pub mod validate;
