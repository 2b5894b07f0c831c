pub mod daily_series;
pub mod daily_snapshot;
pub mod post_series;
