mod activity;
mod advanced;
mod bookmarks;
mod databases;
pub mod helpers;
mod navigation;
mod replication;

pub use activity::reduce_activity;
pub use advanced::reduce_advanced;
pub use bookmarks::reduce_bookmarks;
pub use databases::reduce_databases;
pub use navigation::reduce_navigation;
pub use replication::reduce_replication;
