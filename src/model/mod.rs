pub mod configs;
pub mod snapshot;
pub mod tracked;
