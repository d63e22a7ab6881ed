//! Application layer
//!
//! Contains the reconciliation use cases.
//! Services coordinate between domain entities and the ports to GitHub and Jira.

pub mod advisory;
pub mod attention;
pub mod link_service;
pub mod reconcile_service;
pub mod status_check;
pub mod title_parser;

pub use reconcile_service::ReconcileService;
