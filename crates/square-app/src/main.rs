use anyhow::Result;

use square_app::{SquareApp, SquareConfig};
use square_engine::logging::{init_logging, LoggingConfig};
use square_engine::window::Runtime;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = SquareConfig::default();
    log::info!("starting '{}'", config.title);

    Runtime::run(config.runtime(), config.gpu_init(), SquareApp::new(config))
}
