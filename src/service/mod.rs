pub mod chart_service_impl;
pub mod collect_service_impl;
pub mod render_service_impl;
