mod app;
pub mod cli;
mod content;
mod effects;
mod input;
mod location;
mod logging;
mod ui;

pub use app::run_app;
pub use logging::initialize as initialize_logging;
