mod base;
mod oauth;

pub use base::BaseClient;
pub use oauth::OAuthClient;

use crate::{http::HttpResponse, ClientError, ClientResult};

use serde::Deserialize;

/// Converts a JSON response from LinkedIn into its model.
pub(crate) fn convert_result<'a, T: Deserialize<'a>>(input: &'a str) -> ClientResult<T> {
    libs::serde_json::from_str::<T>(input).map_err(Into::into)
}

/// Creation endpoints answer with an empty body and the URN of the new entity
/// in the `x-restli-id` header.
pub(crate) fn created_id(response: &HttpResponse) -> ClientResult<String> {
    response
        .header(crate::headers::RESTLI_ID)
        .map(ToOwned::to_owned)
        .ok_or(ClientError::MissingHeader(crate::headers::RESTLI_ID))
}
