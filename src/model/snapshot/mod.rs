pub mod blog_stats;
pub mod news;
pub mod post_stat;
pub mod side_column;
pub mod snapshot;
