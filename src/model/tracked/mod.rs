pub mod tracked_post_config;
pub mod tracked_post_list_config;
