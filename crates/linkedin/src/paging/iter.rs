//! Synchronous page following.

use crate::{clients::BaseClient, ClientResult};

use serde::de::DeserializeOwned;

/// Alias for `Iterator<Item = T>`, since sync mode is enabled.
pub type Paginator<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// Yields every entry of the collection at `endpoint`, fetching the next
/// page whenever the current one runs out. The first error ends the
/// iteration.
pub fn paginate<'a, T, C>(client: &'a C, endpoint: String) -> Paginator<'a, ClientResult<T>>
where
    T: DeserializeOwned + Send + 'a,
    C: BaseClient,
{
    Box::new(PageIter {
        client,
        next: Some(endpoint),
        entries: Vec::new().into_iter(),
    })
}

struct PageIter<'a, C, T> {
    client: &'a C,
    next: Option<String>,
    entries: std::vec::IntoIter<T>,
}

impl<'a, C, T> Iterator for PageIter<'a, C, T>
where
    T: DeserializeOwned + Send,
    C: BaseClient,
{
    type Item = ClientResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entries.next() {
                return Some(Ok(entry));
            }

            let url = self.next.take()?;
            match self.client.get_page::<T>(&url) {
                Ok(page) => {
                    self.next = page.next.filter(|next| *next != url);
                    self.entries = page.elements.into_iter();
                }
                Err(err) => return Some(Err(err)),
            }
        }
    }
}
