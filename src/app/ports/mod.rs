pub mod bookmark_store;
pub mod couch_api;
pub mod renderer;

pub use bookmark_store::{BookmarkRepository, BookmarkStoreError};
pub use couch_api::{CouchApi, CouchApiError};
pub use renderer::Renderer;

#[cfg(test)]
pub use bookmark_store::MockBookmarkRepository;
#[cfg(test)]
pub use couch_api::MockCouchApi;
