//! Asynchronous page following.

use crate::{clients::BaseClient, ClientResult};

use std::pin::Pin;

use futures::stream::Stream;
use serde::de::DeserializeOwned;

/// Alias for `futures::stream::Stream<Item = T>`, since async mode is enabled.
pub type Paginator<'a, T> = Pin<Box<dyn Stream<Item = T> + 'a>>;

/// Yields every entry of the collection at `endpoint`, fetching the next
/// page whenever the current one runs out. The first error ends the stream.
pub fn paginate<'a, T, C>(client: &'a C, endpoint: String) -> Paginator<'a, ClientResult<T>>
where
    T: DeserializeOwned + Send + 'a,
    C: BaseClient,
{
    Box::pin(async_stream::stream! {
        let mut next = Some(endpoint);
        while let Some(url) = next.take() {
            match client.get_page::<T>(&url).await {
                Ok(page) => {
                    next = page.next.filter(|next| *next != url);
                    for item in page.elements {
                        yield Ok(item);
                    }
                }
                Err(err) => {
                    yield Err(err);
                }
            }
        }
    })
}
