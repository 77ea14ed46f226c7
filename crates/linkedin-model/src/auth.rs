//! All objects related to the auth flows defined by LinkedIn API

use crate::{
    custom_serde::{duration_second, separated_scopes},
    ModelResult,
};

use std::{
    collections::{HashMap, HashSet},
    fs,
    io::{Read, Write},
    path::Path,
};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// LinkedIn access token information
///
/// [Reference](https://learn.microsoft.com/en-us/linkedin/shared/authentication/authorization-code-flow)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// An access token that can be provided in subsequent calls
    pub access_token: String,
    /// The time period for which the access token is valid.
    #[serde(with = "duration_second")]
    pub expires_in: Duration,
    /// The valid time for which the access token is available represented
    /// in ISO 8601 combined date and time.
    pub expires_at: Option<DateTime<Utc>>,
    /// A token that can be sent to the LinkedIn Accounts service
    /// in place of an authorization code
    pub refresh_token: Option<String>,
    /// Seconds until the refresh token expires. Only present for
    /// applications with programmatic refresh tokens.
    #[serde(default)]
    pub refresh_token_expires_in: Option<i64>,
    /// A list of [scopes](https://learn.microsoft.com/en-us/linkedin/shared/authentication/getting-access)
    /// which have been granted for this `access_token`
    ///
    /// You may use the `scopes!` macro in
    /// [`linkedin-macros`](https://docs.rs/linkedin-macros) to build it at
    /// compile time easily.
    // The token response from LinkedIn is singular, hence the rename to
    // `scope`
    #[serde(default, with = "separated_scopes", rename = "scope")]
    pub scopes: HashSet<String>,
}

impl Default for Token {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            expires_in: Duration::seconds(0),
            expires_at: Some(Utc::now()),
            refresh_token: None,
            refresh_token_expires_in: None,
            scopes: HashSet::new(),
        }
    }
}

impl Token {
    /// Tries to initialize the token from a cache file.
    pub fn from_cache<T: AsRef<Path>>(path: T) -> ModelResult<Self> {
        let mut file = fs::File::open(path)?;
        let mut tok_str = String::new();
        file.read_to_string(&mut tok_str)?;
        let tok = serde_json::from_str::<Self>(&tok_str)?;

        Ok(tok)
    }

    /// Saves the token information into its cache file.
    pub fn write_cache<T: AsRef<Path>>(&self, path: T) -> ModelResult<()> {
        let token_info = serde_json::to_string(&self)?;

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        file.write_all(token_info.as_bytes())?;

        Ok(())
    }

    /// Check if the token is expired. It includes a margin of 10 seconds (which
    /// is how much a request would take in the worst case scenario).
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .map_or(true, |expiration| Utc::now() + Duration::seconds(10) >= expiration)
    }

    /// Generates an HTTP token authorization header with proper formatting
    #[must_use]
    pub fn auth_headers(&self) -> HashMap<String, String> {
        let auth = "authorization".to_owned();
        let value = format!("Bearer {}", self.access_token);

        let mut headers = HashMap::new();
        headers.insert(auth, value);
        headers
    }
}
