pub mod blog_server_config;
pub mod system_config;
pub mod total_config;
