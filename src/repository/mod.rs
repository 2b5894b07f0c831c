pub mod blog_repository_impl;
pub mod snapshot_store_impl;
