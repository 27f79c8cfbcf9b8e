pub mod bookmark_store;
pub mod couch_http;

pub use bookmark_store::JsonBookmarkStore;
pub use couch_http::CouchHttpClient;
