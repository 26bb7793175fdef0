pub mod cli;
pub mod logging;
pub mod output;

pub use cli::{run, Cli};
pub use logging::{init_logging, log_notification};
pub use output::render_deals;
