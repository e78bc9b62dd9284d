use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use tracing::{info, warn};

const PIN_FILE_NAME: &str = "pin.txt";
const ADMIN_EXECUTABLE_NAME: &str = "is_admin.exe";

pub struct Config {
    pub port: u16,
    pub uploads_dir: PathBuf,
    pub secret_dir: PathBuf,
    pub admin_timeout: Duration,
    pub max_story_bytes: usize,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "5000"),
            uploads_dir: try_load("UPLOADS_DIR", "uploads"),
            secret_dir: try_load("SECRET_DIR", "secret"),
            admin_timeout: Duration::from_millis(try_load("ADMIN_TIMEOUT_MS", "5000")),
            max_story_bytes: try_load("MAX_STORY_BYTES", "1048576"),
        }
    }

    pub fn pin_file(&self) -> PathBuf {
        self.secret_dir.join(PIN_FILE_NAME)
    }

    pub fn admin_executable(&self) -> PathBuf {
        self.secret_dir.join(ADMIN_EXECUTABLE_NAME)
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
