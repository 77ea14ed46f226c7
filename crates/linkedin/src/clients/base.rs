use crate::{
    auth_urls, headers,
    http::{BaseHttpClient, Form, Headers, HttpClient, HttpResponse, Query},
    model::Page,
    paging::{self, Paginator},
    sync::Mutex,
    ClientError, ClientResult, Config, Credentials, Token,
};

use std::{fmt, sync::Arc};

use libs::chrono::Utc;
use libs::log;
use libs::serde_json::{self, Value};
use maybe_async::maybe_async;
use serde::de::DeserializeOwned;

/// This trait implements the basic endpoints from the LinkedIn API that may be
/// accessed without user authorization, including parts of the authentication
/// flow that are shared, and the requests and paging every connection builds
/// upon.
#[maybe_async]
pub trait BaseClient
where
    Self: Send + Sync + Default + Clone + fmt::Debug,
{
    fn get_config(&self) -> &Config;
    fn get_http(&self) -> &HttpClient;
    fn get_token(&self) -> Arc<Mutex<Option<Token>>>;
    fn get_creds(&self) -> &Credentials;

    /// If it's a normal client, it will simply attempt to refresh the token
    /// with the refresh token it holds. For the client credentials flow a
    /// fresh token is requested instead. May return `None` if there is
    /// nothing to refresh with.
    async fn refetch_token(&self) -> ClientResult<Option<Token>>;

    /// Re-authenticate the client automatically if it's configured to do so,
    /// which uses the refresh token to obtain a new access token.
    async fn auto_reauth(&self) -> ClientResult<()> {
        if !self.get_config().token_refreshing {
            return Ok(());
        }

        // NOTE: the lock must be released before refreshing
        let expired = self
            .get_token()
            .lock()
            .await
            .as_ref()
            .map_or(false, Token::is_expired);

        if expired {
            log::info!("Access token expired, refreshing it");
            self.refresh_token().await?;
        }

        Ok(())
    }

    /// Refreshes the current access token given a refresh token. The obtained
    /// token will be saved internally.
    async fn refresh_token(&self) -> ClientResult<()> {
        let token = self.refetch_token().await?;
        if let Some(token) = token {
            *self.get_token().lock().await = Some(token);
        }

        self.write_token_cache().await
    }

    /// Prefixes `path` with the API base URL.
    #[inline]
    fn api_url(&self, path: &str) -> String {
        join_url(&self.get_config().api_base_url, path)
    }

    /// Prefixes `path` with the versioned API base URL.
    #[inline]
    fn rest_url(&self, path: &str) -> String {
        join_url(&self.get_config().rest_base_url, path)
    }

    /// Prefixes `path` with the authentication base URL.
    #[inline]
    fn auth_url(&self, path: &str) -> String {
        join_url(&self.get_config().auth_base_url, path)
    }

    /// The headers required for authenticated requests: the bearer token, the
    /// Rest.li protocol version and, when configured, `LinkedIn-Version`.
    async fn auth_headers(&self) -> ClientResult<Headers> {
        self.auto_reauth().await?;

        let mut headers = self
            .get_token()
            .lock()
            .await
            .as_ref()
            .ok_or(ClientError::InvalidToken)?
            .auth_headers();

        headers.insert(
            headers::RESTLI_PROTOCOL_VERSION.to_owned(),
            headers::RESTLI_PROTOCOL_VERSION_VALUE.to_owned(),
        );
        if let Some(version) = &self.get_config().linkedin_version {
            headers.insert(headers::LINKEDIN_VERSION.to_owned(), version.clone());
        }

        Ok(headers)
    }

    // HTTP-related methods. `url` is always the full URL.

    #[inline]
    async fn api_get(&self, url: &str, payload: &Query<'_>) -> ClientResult<String> {
        let headers = self.auth_headers().await?;
        Ok(self.get_http().get(url, Some(&headers), payload).await?.body)
    }

    #[inline]
    async fn api_post(&self, url: &str, payload: &Value) -> ClientResult<HttpResponse> {
        let headers = self.auth_headers().await?;
        Ok(self.get_http().post(url, Some(&headers), payload).await?)
    }

    #[inline]
    async fn api_put(&self, url: &str, payload: &Value) -> ClientResult<HttpResponse> {
        let headers = self.auth_headers().await?;
        Ok(self.get_http().put(url, Some(&headers), payload).await?)
    }

    #[inline]
    async fn api_delete(&self, url: &str, payload: &Value) -> ClientResult<HttpResponse> {
        let headers = self.auth_headers().await?;
        Ok(self.get_http().delete(url, Some(&headers), payload).await?)
    }

    /// Fetches one page of a collection. `url` is the full endpoint,
    /// including its query; the returned page carries the URLs of its
    /// neighbours, which can be passed back here.
    async fn get_page<T>(&self, url: &str) -> ClientResult<Page<T>>
    where
        T: DeserializeOwned + Send,
    {
        let body = self.api_get(url, &Query::new()).await?;
        let json = serde_json::from_str::<Value>(&body)?;
        paging::into_page(self.get_config().api_version, json, url)
    }

    /// Every entry of the collection at `url`, following the pages as they
    /// run out.
    fn paginate<'a, T>(&'a self, url: String) -> Paginator<'a, ClientResult<T>>
    where
        T: DeserializeOwned + Send + 'a,
    {
        paging::paginate(self, url)
    }

    /// Sends a request to LinkedIn for an access token.
    async fn fetch_access_token(&self, payload: &Form<'_>) -> ClientResult<Token> {
        let response = self
            .get_http()
            .post_form(&self.auth_url(auth_urls::TOKEN), None, payload)
            .await?;

        let mut tok = serde_json::from_str::<Token>(&response.body)?;
        tok.expires_at = Utc::now().checked_add_signed(tok.expires_in);
        Ok(tok)
    }

    /// Updates the cache file at the internal cache path.
    ///
    /// This should be used whenever it's possible to, even if the cached token
    /// isn't configured, because this will already check `Config::token_cached`
    /// and do nothing in that case already.
    async fn write_token_cache(&self) -> ClientResult<()> {
        if !self.get_config().token_cached {
            log::info!("Auth token cache write ignored (not configured)");
            return Ok(());
        }

        log::info!("Writing auth token cache");
        let token = self.get_token();
        let token = token.lock().await;
        if let Some(tok) = token.as_ref() {
            tok.write_cache(&self.get_config().cache_path)?;
        }

        Ok(())
    }
}

fn join_url(base: &str, path: &str) -> String {
    let mut url = base.to_owned();
    if !url.ends_with('/') {
        url.push('/');
    }
    url + path.trim_start_matches('/')
}

#[cfg(test)]
mod test {
    use super::join_url;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://api.linkedin.com/v2", "/userinfo"),
            "https://api.linkedin.com/v2/userinfo"
        );
        assert_eq!(
            join_url("https://api.linkedin.com/rest/", "posts"),
            "https://api.linkedin.com/rest/posts"
        );
    }
}
