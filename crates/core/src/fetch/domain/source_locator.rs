use std::fmt;

use crate::shared::constants::WATCH_URL_TEMPLATE;

/// Watch-page URL of a remote video, built from its identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLocator {
    identifier: String,
    url: String,
}

impl SourceLocator {
    pub fn from_identifier(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            url: WATCH_URL_TEMPLATE.replace("{id}", identifier),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
