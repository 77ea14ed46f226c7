use std::collections::HashMap;
use std::fmt;

use libs::serde_json::Value;
use maybe_async::maybe_async;

pub type Headers = HashMap<String, String>;
pub type Query<'a> = HashMap<&'a str, &'a str>;
pub type Form<'a> = HashMap<&'a str, &'a str>;

/// What came back from LinkedIn for a single request: the status code, the
/// response headers (names lowercased) and the raw body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// This trait represents the interface to be implemented for an HTTP client,
/// which is kept separate from the LinkedIn client for cleaner code. Thus, it
/// also requires other basic traits that are needed for the LinkedIn client.
///
/// When a request doesn't need to pass parameters, the empty or default value
/// of the payload type should be passed, like `json!({})` or `Query::new()`.
/// This avoids using `Option<T>` because `Value` itself may be null in other
/// different ways (`Value::Null`, an empty `Value::Object`...), so this removes
/// redundancy and edge cases (a `Some(Value::Null), for example, doesn't make
/// much sense).
///
/// Every method resolves to `Ok` only for 2xx answers. Any other status is
/// reported through the implementation's error type, carrying the full
/// [`HttpResponse`].
#[maybe_async]
pub trait BaseHttpClient: Send + Default + Clone + fmt::Debug {
    type Error;

    // This internal function should always be given an object value in JSON.
    async fn get(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Query,
    ) -> Result<HttpResponse, Self::Error>;

    async fn post(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<HttpResponse, Self::Error>;

    async fn post_form(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Form<'_>,
    ) -> Result<HttpResponse, Self::Error>;

    async fn put(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<HttpResponse, Self::Error>;

    async fn delete(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<HttpResponse, Self::Error>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_header_lookup_ignores_case() {
        let mut headers = Headers::new();
        headers.insert("x-restli-id".to_owned(), "urn:li:share:1".to_owned());
        let response = HttpResponse {
            status: 201,
            headers,
            body: String::new(),
        };

        assert!(response.is_success());
        assert_eq!(response.header("X-RestLi-Id"), Some("urn:li:share:1"));
        assert_eq!(response.header("location"), None);
    }

    #[test]
    fn test_non_2xx_is_not_success() {
        let response = HttpResponse {
            status: 404,
            ..Default::default()
        };
        assert!(!response.is_success());
    }
}
