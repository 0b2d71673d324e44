use crate::{DEFAULT_API_KEY, DEFAULT_TOKEN};

use std::fmt;

/// Trello API key and auth token.
///
/// Resolved once at startup and handed to the HTTP client by value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub token: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            token: token.into(),
        }
    }

    /// True when either half is still the built-in placeholder value
    pub fn is_placeholder(&self) -> bool {
        self.api_key == DEFAULT_API_KEY || self.token == DEFAULT_TOKEN
    }

    /// API key safe for logs: the first four characters of a long key, else nothing
    pub fn masked_key(&self) -> String {
        if self.api_key.chars().count() > 8 {
            let prefix: String = self.api_key.chars().take(4).collect();
            format!("{prefix}****")
        } else {
            "****".to_string()
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY, DEFAULT_TOKEN)
    }
}

// Never print the token, even in debug output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("token", &"<redacted>")
            .finish()
    }
}
