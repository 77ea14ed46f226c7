//! The LinkedIn resources, one trait per resource. Each trait only needs the
//! requests of [`BaseClient`](crate::clients::BaseClient), so they are
//! implemented for every client and brought into scope with the
//! [`prelude`](crate::prelude).
//!
//! Finders return a single [`Page`](crate::model::Page); its `next` URL (or
//! [`BaseClient::paginate`](crate::clients::BaseClient::paginate)) gives
//! access to the rest of the collection.

mod images;
mod organizations;
mod posts;
mod shares;
mod statistics;
mod videos;

pub use images::ImageConnection;
pub use organizations::OrganizationConnection;
pub use posts::PostConnection;
pub use shares::ShareConnection;
pub use statistics::StatisticsConnection;
pub use videos::VideoConnection;
