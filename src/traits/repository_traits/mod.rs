pub mod blog_repository;
pub mod snapshot_store;
