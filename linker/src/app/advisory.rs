//! Advisories
//!
//! Everything the reconciler notices but does not act on. Advisories are
//! logged and counted, they never fail a run.

/// Review-attention bucket of an open pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attention {
    /// Neither an issue key nor a bug marker in the title
    Unassigned,
    AwaitingBugfixReview,
    AwaitingFeatureReview,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    Attention {
        attention: Attention,
        url: String,
        title: String,
    },
    /// Open pull request without the hold label
    NotOnHold { url: String },
    StatusMismatch {
        key: String,
        got: String,
        want: Vec<&'static str>,
    },
    UnexpectedState { url: String, state: String },
}

impl Advisory {
    /// Pull request the advisory is about, if it names one
    pub fn url(&self) -> Option<&str> {
        match self {
            Advisory::Attention { url, .. }
            | Advisory::NotOnHold { url }
            | Advisory::UnexpectedState { url, .. } => Some(url.as_str()),
            Advisory::StatusMismatch { .. } => None,
        }
    }

    pub fn issue_key(&self) -> Option<&str> {
        match self {
            Advisory::StatusMismatch { key, .. } => Some(key.as_str()),
            _ => None,
        }
    }

    pub fn log(&self) {
        let url = self.url();
        let issue = self.issue_key();
        match self {
            Advisory::UnexpectedState { .. } => tracing::warn!(url, issue, "{}", self),
            _ => tracing::info!(url, issue, "{}", self),
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::Attention {
                attention: Attention::Unassigned,
                url,
                title,
            } => write!(
                f,
                "The pull request {} is not assigned to a bug nor a story: {}",
                url, title
            ),
            Advisory::Attention {
                attention: Attention::AwaitingBugfixReview,
                url,
                title,
            } => write!(f, "Awaiting review (bugfix): {}: {}", url, title),
            Advisory::Attention {
                attention: Attention::AwaitingFeatureReview,
                url,
                title,
            } => write!(f, "Awaiting review (feature): {}: {}", url, title),
            Advisory::NotOnHold { url } => write!(
                f,
                "The pull request {} is open and it's not on hold. \
                 Please make sure that it has got all approvals or put it on hold.",
                url
            ),
            Advisory::StatusMismatch { key, got, want } => {
                write!(f, "{}: got {}, want {}", key, got, want.join(" or "))
            }
            Advisory::UnexpectedState { url, state } => {
                write!(f, "{}: unexpected state {:?}", url, state)
            }
        }
    }
}
