use dust_harvester_dash::config::Config;
use tracing::{info, warn};

fn main() {
    let (config, config_error) = match Config::load() {
        Ok(c) => (c, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let level = config.log_level().unwrap_or(tracing::Level::INFO);
    dioxus_logger::init(level).expect("failed to init logger");

    if let Some(e) = config_error {
        warn!(error = %e, "invalid embedded config, using defaults");
    }

    info!("harvester dashboard v{} starting", env!("CARGO_PKG_VERSION"));

    #[cfg(target_arch = "wasm32")]
    dioxus::prelude::launch(dust_harvester_dash::dashboard::view::App);

    #[cfg(not(target_arch = "wasm32"))]
    warn!(
        api_base = %config.api.base_url,
        "the dashboard renders in the browser; build it for wasm32-unknown-unknown"
    );
}
