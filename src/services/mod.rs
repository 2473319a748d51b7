pub mod dashboard;
pub mod entry;
pub mod server;
pub mod summary;
