use crate::{
    clients::BaseClient,
    http::{Form, HttpClient},
    params,
    sync::Mutex,
    ClientResult, Config, Credentials, Token,
};

use std::sync::Arc;

use libs::log;
use maybe_async::maybe_async;

/// Client for the [Client Credentials Flow][reference], the two legged flow
/// available to applications granted access to it by LinkedIn.
///
/// There is no member involved, so only the [`BaseClient`] endpoints are
/// available, through the connections in [`crate::connections`]. The issued
/// tokens come without a refresh token; when they expire a new one is simply
/// requested with the same credentials.
///
/// [reference]: https://learn.microsoft.com/en-us/linkedin/shared/authentication/client-credentials-flow
#[derive(Clone, Debug, Default)]
pub struct ClientCredsLinkedIn {
    pub config: Config,
    pub creds: Credentials,
    pub token: Arc<Mutex<Option<Token>>>,
    pub(crate) http: HttpClient,
}

/// This client has access to the base methods.
#[maybe_async]
impl BaseClient for ClientCredsLinkedIn {
    fn get_http(&self) -> &HttpClient {
        &self.http
    }

    fn get_token(&self) -> Arc<Mutex<Option<Token>>> {
        Arc::clone(&self.token)
    }

    fn get_creds(&self) -> &Credentials {
        &self.creds
    }

    fn get_config(&self) -> &Config {
        &self.config
    }

    /// Client credentials tokens can't be refreshed, a new one is requested
    /// instead.
    async fn refetch_token(&self) -> ClientResult<Option<Token>> {
        let token = self.fetch_token().await?;
        Ok(Some(token))
    }
}

impl ClientCredsLinkedIn {
    /// Builds a new [`ClientCredsLinkedIn`] given a pair of client
    /// credentials.
    #[must_use]
    pub fn new(creds: Credentials) -> Self {
        Self {
            creds,
            ..Default::default()
        }
    }

    /// Build a new [`ClientCredsLinkedIn`] from an already generated token.
    /// Note that once the token expires this will fail to make requests, as
    /// the client credentials aren't known.
    #[must_use]
    pub fn from_token(token: Token) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token))),
            ..Default::default()
        }
    }

    /// Same as [`Self::new`] but with an extra parameter to configure the
    /// client.
    #[must_use]
    pub fn with_config(creds: Credentials, config: Config) -> Self {
        Self {
            config,
            creds,
            ..Default::default()
        }
    }

    #[maybe_async]
    async fn fetch_token(&self) -> ClientResult<Token> {
        let mut data: Form = self.creds.form_fields()?;
        data.insert(params::GRANT_TYPE, params::GRANT_TYPE_CLIENT_CREDS);

        self.fetch_access_token(&data).await
    }

    /// Obtains the client access token for the app. The resulting token will
    /// be saved internally.
    #[maybe_async]
    pub async fn request_token(&self) -> ClientResult<()> {
        log::info!("Requesting Client Credentials token");

        let token = self.fetch_token().await?;
        *self.token.lock().await = Some(token);

        self.write_token_cache().await
    }
}
