//! # Route Modules
//!
//! Each module defines the handlers for one API surface area. The
//! application router is assembled in the crate root.

pub mod auth;
pub mod health;
pub mod predictions;
pub mod profile;
