use log::{error, info};

use landing_interactions::config;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page interactions");
    if let Err(err) = landing_interactions::start() {
        error!("Landing page interactions failed to start: {}", err);
    }
}
