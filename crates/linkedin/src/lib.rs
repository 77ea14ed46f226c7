//! Client for the LinkedIn REST APIs.
//!
//! The clients ([`AuthCodeLinkedIn`] and [`ClientCredsLinkedIn`]) implement
//! [`BaseClient`](clients::BaseClient), which gives access to the raw
//! requests and to paginated collections, and through it every resource
//! connection in [`connections`].
//!
//! Collections are returned one [`Page`](model::Page) at a time. The URLs of
//! the neighbouring pages are computed by a [`PagingStrategy`] picked from the
//! configured [`ApiVersion`], because legacy and versioned endpoints describe
//! their position in the result set differently.

mod auth_code;
mod client_creds;
pub mod clients;
pub mod connections;
pub mod paging;
pub mod sync;
pub mod util;
mod version;

pub use linkedin_http as http;
pub use linkedin_macros as macros;
pub use linkedin_model as model;

pub use auth_code::AuthCodeLinkedIn;
pub use client_creds::ClientCredsLinkedIn;
pub use paging::{Discovery, PageLinks, PagingError, PagingStrategy};
pub use version::ApiVersion;

use crate::http::HttpError;
pub use macros::{query, scopes};
pub use model::Token;

use std::{
    collections::{HashMap, HashSet},
    env,
    path::PathBuf,
};

use getrandom::getrandom;
use libs::log;
use thiserror::Error;

pub mod prelude {
    pub use crate::clients::{BaseClient, OAuthClient};
    pub use crate::connections::{
        ImageConnection, OrganizationConnection, PostConnection, ShareConnection,
        StatisticsConnection, VideoConnection,
    };
    pub use crate::model::idtypes::Id;
}

/// Common headers as constants.
pub(crate) mod params {
    pub const CLIENT_ID: &str = "client_id";
    pub const CLIENT_SECRET: &str = "client_secret";
    pub const CODE: &str = "code";
    pub const GRANT_TYPE: &str = "grant_type";
    pub const GRANT_TYPE_AUTH_CODE: &str = "authorization_code";
    pub const GRANT_TYPE_CLIENT_CREDS: &str = "client_credentials";
    pub const GRANT_TYPE_REFRESH_TOKEN: &str = "refresh_token";
    pub const REDIRECT_URI: &str = "redirect_uri";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const RESPONSE_TYPE_CODE: &str = "code";
    pub const RESPONSE_TYPE: &str = "response_type";
    pub const SCOPE: &str = "scope";
    pub const STATE: &str = "state";
}

/// Headers LinkedIn expects on every API call.
pub(crate) mod headers {
    pub const RESTLI_PROTOCOL_VERSION: &str = "X-Restli-Protocol-Version";
    pub const RESTLI_PROTOCOL_VERSION_VALUE: &str = "2.0.0";
    pub const LINKEDIN_VERSION: &str = "LinkedIn-Version";
    pub const RESTLI_ID: &str = "x-restli-id";
}

/// Common alphabets for random number generation and similars
pub(crate) mod alphabets {
    pub const ALPHANUM: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
}

pub(crate) mod auth_urls {
    pub const AUTHORIZE: &str = "authorization";
    pub const TOKEN: &str = "accessToken";
}

// Possible errors returned from the `linkedin` client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("json parse error: {0}")]
    ParseJson(#[from] libs::serde_json::Error),

    #[error("url parse error: {0}")]
    ParseUrl(#[from] libs::url::ParseError),

    // Note that this type is boxed because its size might be very large in
    // comparison to the rest. For more information visit:
    // https://rust-lang.github.io/rust-clippy/master/index.html#large_enum_variant
    #[error("http error: {0}")]
    Http(Box<HttpError>),

    #[error("input/output error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "cli")]
    #[error("cli error: {0}")]
    Cli(String),

    #[error("no client secret set in the credentials")]
    MissingSecret,

    #[error("no access token available, authenticate first")]
    InvalidToken,

    #[error("no OAuth state set for the authorization request")]
    MissingState,

    #[error("random generation error: {0}")]
    Random(#[from] getrandom::Error),

    #[error("response is missing the `{0}` header")]
    MissingHeader(&'static str),

    #[error("model error: {0}")]
    Model(#[from] model::ModelError),

    #[error("id error: {0}")]
    Id(#[from] model::IdError),

    #[error("paging error: {0}")]
    Paging(#[from] PagingError),
}

// The conversion has to be done manually because it's in a `Box<T>`
impl From<HttpError> for ClientError {
    fn from(err: HttpError) -> Self {
        Self::Http(Box::new(err))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

pub const DEFAULT_API_BASE_URL: &str = "https://api.linkedin.com/v2/";
pub const DEFAULT_REST_BASE_URL: &str = "https://api.linkedin.com/rest/";
pub const DEFAULT_AUTH_BASE_URL: &str = "https://www.linkedin.com/oauth/v2/";
pub const DEFAULT_CACHE_PATH: &str = ".linkedin_token_cache.json";
/// Monthly version sent as the `LinkedIn-Version` header to the versioned
/// (`/rest`) endpoints.
pub const DEFAULT_LINKEDIN_VERSION: &str = "202401";

/// Struct to configure the LinkedIn client.
#[derive(Debug, Clone)]
pub struct Config {
    /// The LinkedIn API prefix, [`DEFAULT_API_BASE_URL`] by default.
    pub api_base_url: String,

    /// The prefix of the versioned API, [`DEFAULT_REST_BASE_URL`] by default.
    pub rest_base_url: String,

    /// The LinkedIn Authentication prefix, [`DEFAULT_AUTH_BASE_URL`] by default.
    pub auth_base_url: String,

    /// Which paging convention collections follow. [`ApiVersion::V2`] by
    /// default.
    pub api_version: ApiVersion,

    /// Value of the `LinkedIn-Version` header. No header is sent when `None`.
    pub linkedin_version: Option<String>,

    /// The cache file path, in case it's used. By default it's
    /// [`DEFAULT_CACHE_PATH`]
    pub cache_path: PathBuf,

    /// Whether or not to save the authentication token into a JSON file,
    /// then reread the token from JSON file when launching the program without
    /// following the full auth process again
    pub token_cached: bool,

    /// Whether or not to check if the token has expired when sending a
    /// request with credentials, and in that case, automatically refresh it.
    pub token_refreshing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            rest_base_url: String::from(DEFAULT_REST_BASE_URL),
            auth_base_url: String::from(DEFAULT_AUTH_BASE_URL),
            api_version: ApiVersion::V2,
            linkedin_version: Some(String::from(DEFAULT_LINKEDIN_VERSION)),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            token_cached: false,
            token_refreshing: false,
        }
    }
}

impl Config {
    /// Default configuration overridden by the environment variables
    /// `LINKEDIN_API_VERSION` (`v1` or `v2`) and `LINKEDIN_VERSION` (the
    /// `LinkedIn-Version` header). You can optionally activate the `env-file`
    /// feature in order to read these variables from a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        #[cfg(feature = "env-file")]
        {
            dotenv::dotenv().ok();
        }

        let mut config = Self::default();
        if let Ok(version) = env::var("LINKEDIN_API_VERSION") {
            config.api_version = ApiVersion::resolve(&version);
        }
        if let Ok(linkedin_version) = env::var("LINKEDIN_VERSION") {
            config.linkedin_version = Some(linkedin_version);
        }
        config
    }
}

/// Generate `length` random chars from the Operating System.
///
/// It is assumed that system always provides high-quality cryptographically
/// secure random data, ideally backed by hardware entropy sources.
pub(crate) fn generate_random_string(length: usize, alphabet: &[u8]) -> ClientResult<String> {
    let mut buf = vec![0u8; length];
    getrandom(&mut buf)?;
    let range = alphabet.len();

    Ok(buf
        .iter()
        .map(|byte| alphabet[*byte as usize % range] as char)
        .collect())
}

#[inline]
pub(crate) fn join_scopes(scopes: &HashSet<String>) -> String {
    scopes
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Simple client credentials object for LinkedIn.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub id: String,
    pub secret: Option<String>,
}

impl Credentials {
    /// Initialization with both the client ID and the client secret
    #[must_use]
    pub fn new(id: &str, secret: &str) -> Self {
        Self {
            id: id.to_owned(),
            secret: Some(secret.to_owned()),
        }
    }

    /// Parses the credentials from the environment variables
    /// `LINKEDIN_CLIENT_ID` and `LINKEDIN_CLIENT_SECRET`. You can optionally
    /// activate the `env-file` feature in order to read these variables from
    /// a `.env` file.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        #[cfg(feature = "env-file")]
        {
            dotenv::dotenv().ok();
        }

        Some(Self {
            id: env::var("LINKEDIN_CLIENT_ID").ok()?,
            secret: env::var("LINKEDIN_CLIENT_SECRET").ok(),
        })
    }

    /// LinkedIn takes the client credentials in the body of the token
    /// requests rather than in an authorization header.
    pub(crate) fn form_fields(&self) -> ClientResult<HashMap<&'static str, &str>> {
        let secret = self.secret.as_deref().ok_or(ClientError::MissingSecret)?;

        let mut fields = HashMap::new();
        fields.insert(params::CLIENT_ID, self.id.as_str());
        fields.insert(params::CLIENT_SECRET, secret);
        Ok(fields)
    }
}

/// Structure that holds the required information for requests with OAuth.
#[derive(Debug, Clone)]
pub struct OAuth {
    pub redirect_uri: String,
    /// The state is generated by default, as suggested by the OAuth2 spec:
    /// [Cross-Site Request Forgery](https://tools.ietf.org/html/rfc6749#section-10.12)
    pub state: String,
    /// You could use macro [scopes!](crate::scopes) to build it at compile time easily
    pub scopes: HashSet<String>,
}

impl Default for OAuth {
    /// Without a source of randomness the state is left empty, and
    /// [`AuthCodeLinkedIn::get_authorize_url`] refuses to build a URL for it.
    fn default() -> Self {
        let state = generate_random_string(16, alphabets::ALPHANUM).unwrap_or_else(|err| {
            log::error!("Couldn't generate the OAuth state: {err}");
            String::new()
        });

        Self {
            redirect_uri: String::new(),
            state,
            scopes: HashSet::new(),
        }
    }
}

impl OAuth {
    /// Parses the credentials from the environment variable
    /// `LINKEDIN_REDIRECT_URI`. You can optionally activate the `env-file`
    /// feature in order to read these variables from a `.env` file.
    #[must_use]
    pub fn from_env(scopes: HashSet<String>) -> Option<Self> {
        #[cfg(feature = "env-file")]
        {
            dotenv::dotenv().ok();
        }

        Some(Self {
            scopes,
            redirect_uri: env::var("LINKEDIN_REDIRECT_URI").ok()?,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_generate_random_string() {
        let state = generate_random_string(16, alphabets::ALPHANUM).unwrap();
        assert_eq!(state.len(), 16);
        assert!(state.bytes().all(|b| alphabets::ALPHANUM.contains(&b)));
    }

    #[test]
    fn test_form_fields_need_secret() {
        let creds = Credentials {
            id: "id".to_owned(),
            secret: None,
        };
        assert!(matches!(
            creds.form_fields(),
            Err(ClientError::MissingSecret)
        ));

        let creds = Credentials::new("id", "secret");
        let fields = creds.form_fields().unwrap();
        assert_eq!(fields.get(params::CLIENT_SECRET), Some(&"secret"));
    }
}
