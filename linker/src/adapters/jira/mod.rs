//! Jira adapter
//!
//! Implementation of the issue tracker on top of the Jira REST API (v2).

pub mod client;

pub use client::JiraClientImpl;
