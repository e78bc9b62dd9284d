use std::sync::Arc;

use tracing::info;

use crate::{
    admin::{AuthorizationOracle, ProcessOracle},
    config::Config,
    secret,
    store::StoryStore,
};

pub struct AppState {
    pub config: Config,
    pub store: StoryStore,
    pub oracle: Box<dyn AuthorizationOracle>,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();
        let oracle = ProcessOracle::new(config.admin_executable(), config.admin_timeout);

        Self::init(config, Box::new(oracle)).await
    }

    /// Startup wiring, shared with tests that swap in their own config and
    /// oracle. Writing the debug pin is a readiness gate: if the secret
    /// directory is not writable the process must not serve traffic.
    pub async fn init(config: Config, oracle: Box<dyn AuthorizationOracle>) -> Arc<Self> {
        let store = StoryStore::open(&config.uploads_dir)
            .await
            .expect("Uploads directory unavailable!");

        let pin = secret::generate_pin(&mut rand::rng());
        secret::write_pin_file(&config.pin_file(), &pin)
            .await
            .expect("Secret directory unavailable!");

        info!("Debug pin written to {}", config.pin_file().display());

        Arc::new(Self {
            config,
            store,
            oracle,
        })
    }
}
