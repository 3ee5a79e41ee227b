use anyhow::Context;
use core::time::Duration;
use std::{env, path::PathBuf};

pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    /// Artificial latency before the content generators reply.
    pub delay: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT").context("PORT is not set")?.parse().context("PORT is not a port number")?;
        let data_dir = env::var_os("DATA_DIR").map_or_else(|| PathBuf::from("data"), PathBuf::from);
        let delay = match env::var("MOCK_DELAY_MS") {
            Ok(millis) => Duration::from_millis(millis.parse().context("MOCK_DELAY_MS is not a number")?),
            Err(env::VarError::NotPresent) => Duration::ZERO,
            Err(err) => return Err(err).context("MOCK_DELAY_MS is not valid unicode"),
        };
        Ok(Self { port, data_dir, delay })
    }
}
