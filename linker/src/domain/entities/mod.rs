//! Domain entities
//!
//! Ephemeral per-run projections of the two remote systems.
//! Nothing here is ever persisted.

pub mod issue;
pub mod pull_request;
pub mod remote_link;
pub mod repo;

pub use issue::Issue;
pub use pull_request::{PullRequest, PullRequestState};
pub use remote_link::{RemoteLink, RemoteLinkIcon};
pub use repo::RepoRef;
