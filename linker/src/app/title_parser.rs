//! Title parser for pull request titles
//!
//! Recognizes the two markers a pull request title may start with:
//! - `IR-123: ...` references a Jira issue of one of the tracked projects
//! - `Bug 123: ...` marks a bugfix tracked outside Jira (never linked)

use regex::Regex;

/// An issue key found at the start of a title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch {
    /// Issue key, e.g. `IR-123`
    pub key: String,
    /// Title with the leading `<key>: ` marker removed
    pub residual: String,
}

/// Result of parsing a pull request title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTitle {
    pub issue: Option<KeyMatch>,
    /// Only consulted when no issue key matched, so always false otherwise
    pub bug_marker: bool,
}

/// Parser built from the configured Jira project prefixes
#[derive(Debug, Clone)]
pub struct TitleParser {
    key_re: Option<Regex>,
    bug_re: Regex,
}

impl TitleParser {
    pub fn new<S: AsRef<str>>(projects: &[S]) -> Result<Self, regex::Error> {
        let key_re = if projects.is_empty() {
            None
        } else {
            let alternatives = projects
                .iter()
                .map(|p| regex::escape(p.as_ref()))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(r"^((?:{})-[0-9]+): ", alternatives))?)
        };

        Ok(Self {
            key_re,
            bug_re: Regex::new(r"Bug [0-9]+: ")?,
        })
    }

    /// Extract the issue key the title starts with, if any
    pub fn extract_key(&self, title: &str) -> Option<KeyMatch> {
        let caps = self.key_re.as_ref()?.captures(title)?;
        let key = caps.get(1)?.as_str();
        let marker_end = caps.get(0)?.end();

        Some(KeyMatch {
            key: key.to_string(),
            residual: title[marker_end..].to_string(),
        })
    }

    /// Whether the title carries a `Bug <number>: ` marker
    pub fn has_bug_marker(&self, title: &str) -> bool {
        self.bug_re.is_match(title)
    }

    pub fn parse(&self, title: &str) -> ParsedTitle {
        match self.extract_key(title) {
            Some(issue) => ParsedTitle {
                issue: Some(issue),
                bug_marker: false,
            },
            None => ParsedTitle {
                issue: None,
                bug_marker: self.has_bug_marker(title),
            },
        }
    }
}
