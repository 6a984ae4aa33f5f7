use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_SNAPSHOT_PATH: &str = "./prcs_spot_ida_spain.parquet";

#[derive(Debug, Clone)]
pub struct Settings {
    pub snapshot_path: PathBuf,
    pub port: u16,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        let snapshot_path = std::env::var("SNAPSHOT_PATH")
            .unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
            .into();
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid port number")?;

        Ok(Self {
            snapshot_path,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_env() {
        // Relies on the test process not exporting SNAPSHOT_PATH/PORT.
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.snapshot_path, PathBuf::from(DEFAULT_SNAPSHOT_PATH));
        assert_eq!(settings.port, 3000);
    }
}
