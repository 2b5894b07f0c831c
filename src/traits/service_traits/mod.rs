pub mod chart_service;
pub mod collect_service;
pub mod render_service;
