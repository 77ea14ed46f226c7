use crate::{
    auth_urls,
    clients::{BaseClient, OAuthClient},
    http::{Form, HttpClient},
    join_scopes, params,
    sync::Mutex,
    ClientError, ClientResult, Config, Credentials, OAuth, Token,
};

use std::collections::HashMap;
use std::sync::Arc;

use libs::log;
use libs::url::Url;
use maybe_async::maybe_async;

/// Client for the [Authorization Code Flow][reference], the three legged
/// flow in which a member grants the application access to their data.
///
/// The member is sent to [`Self::get_authorize_url`] and comes back to the
/// redirect URI with a code, which [`OAuthClient::request_token`] exchanges
/// for an access token. With the `cli` feature enabled,
/// [`OAuthClient::prompt_for_token`] drives the whole exchange from a
/// terminal.
///
/// Applications with programmatic refresh tokens get a refresh token along
/// with the access token, which is used by [`BaseClient::refresh_token`].
///
/// [reference]: https://learn.microsoft.com/en-us/linkedin/shared/authentication/authorization-code-flow
#[derive(Clone, Debug, Default)]
pub struct AuthCodeLinkedIn {
    pub creds: Credentials,
    pub oauth: OAuth,
    pub config: Config,
    pub token: Arc<Mutex<Option<Token>>>,
    pub(crate) http: HttpClient,
}

/// This client has access to the base methods.
#[maybe_async]
impl BaseClient for AuthCodeLinkedIn {
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

    /// Refetch the current access token given a refresh token. May return
    /// `None` if there's no access/refresh token.
    async fn refetch_token(&self) -> ClientResult<Option<Token>> {
        let refresh_token = match self.token.lock().await.as_ref() {
            Some(Token {
                refresh_token: Some(refresh_token),
                ..
            }) => refresh_token.clone(),
            _ => return Ok(None),
        };

        let mut data = self.creds.form_fields()?;
        data.insert(params::GRANT_TYPE, params::GRANT_TYPE_REFRESH_TOKEN);
        data.insert(params::REFRESH_TOKEN, &refresh_token);

        let mut token = self.fetch_access_token(&data).await?;
        // LinkedIn only answers with a new refresh token when the previous
        // one is about to expire.
        if token.refresh_token.is_none() {
            token.refresh_token = Some(refresh_token);
        }
        Ok(Some(token))
    }
}

/// This client includes user authorization, so it has access to the member
/// endpoints in [`OAuthClient`].
#[maybe_async]
impl OAuthClient for AuthCodeLinkedIn {
    fn get_oauth(&self) -> &OAuth {
        &self.oauth
    }

    /// Obtains a user access token given a code, as part of the OAuth
    /// authentication. The access token will be saved internally.
    async fn request_token(&self, code: &str) -> ClientResult<()> {
        log::info!("Requesting Auth Code token");

        let mut data: Form = self.creds.form_fields()?;
        data.insert(params::GRANT_TYPE, params::GRANT_TYPE_AUTH_CODE);
        data.insert(params::REDIRECT_URI, &self.oauth.redirect_uri);
        data.insert(params::CODE, code);

        let token = self.fetch_access_token(&data).await?;
        *self.token.lock().await = Some(token);

        self.write_token_cache().await
    }
}

impl AuthCodeLinkedIn {
    /// Builds a new [`AuthCodeLinkedIn`] given a pair of client credentials
    /// and OAuth information.
    #[must_use]
    pub fn new(creds: Credentials, oauth: OAuth) -> Self {
        Self {
            creds,
            oauth,
            ..Default::default()
        }
    }

    /// Build a new [`AuthCodeLinkedIn`] from an already generated token. Note
    /// that once the token expires this will fail to make requests, as the
    /// client credentials aren't known.
    #[must_use]
    pub fn from_token(token: Token) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token))),
            ..Default::default()
        }
    }

    /// Same as [`Self::from_token`] but with an extra parameter to configure
    /// the client.
    #[must_use]
    pub fn from_token_with_config(token: Token, config: Config) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token))),
            config,
            ..Default::default()
        }
    }

    /// Same as [`Self::new`] but with an extra parameter to configure the
    /// client.
    #[must_use]
    pub fn with_config(creds: Credentials, oauth: OAuth, config: Config) -> Self {
        Self {
            creds,
            oauth,
            config,
            ..Default::default()
        }
    }

    /// Returns the URL needed to authorize the current client as the first step
    /// in the authorization flow.
    pub fn get_authorize_url(&self) -> ClientResult<String> {
        log::info!("Building auth URL");

        if self.oauth.state.is_empty() {
            return Err(ClientError::MissingState);
        }

        let scopes = join_scopes(&self.oauth.scopes);

        let mut payload: HashMap<&str, &str> = HashMap::new();
        payload.insert(params::RESPONSE_TYPE, params::RESPONSE_TYPE_CODE);
        payload.insert(params::CLIENT_ID, &self.creds.id);
        payload.insert(params::REDIRECT_URI, &self.oauth.redirect_uri);
        payload.insert(params::SCOPE, &scopes);
        payload.insert(params::STATE, &self.oauth.state);

        let request_url = self.auth_url(auth_urls::AUTHORIZE);
        let parsed = Url::parse_with_params(&request_url, payload)?;
        Ok(parsed.into())
    }
}
