//! Domain layer
//!
//! Contains the read-only views of pull requests and issues, and the
//! ports the reconciliation logic needs from the outside world.
//! - `entities`: Domain models for pull requests, issues and remote links
//! - `ports`: Trait definitions for the pull-request source and issue tracker

pub mod entities;
pub mod ports;
