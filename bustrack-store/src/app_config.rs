use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub latency: LatencyConfig,
    pub inventory: InventoryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Simulated network delays, in milliseconds.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LatencyConfig {
    #[serde(default)]
    pub search_ms: u64,
    #[serde(default)]
    pub seat_map_ms: u64,
    #[serde(default)]
    pub booking_ms: u64,
    #[serde(default)]
    pub download_ms: u64,
    #[serde(default)]
    pub tickets_ms: u64,
    #[serde(default)]
    pub register_ms: u64,
}

impl LatencyConfig {
    pub fn search(&self) -> Duration {
        Duration::from_millis(self.search_ms)
    }

    pub fn seat_map(&self) -> Duration {
        Duration::from_millis(self.seat_map_ms)
    }

    pub fn booking(&self) -> Duration {
        Duration::from_millis(self.booking_ms)
    }

    pub fn download(&self) -> Duration {
        Duration::from_millis(self.download_ms)
    }

    pub fn tickets(&self) -> Duration {
        Duration::from_millis(self.tickets_ms)
    }

    pub fn register(&self) -> Duration {
        Duration::from_millis(self.register_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    #[serde(default = "default_booked_probability")]
    pub booked_probability: f64,
    /// Pins every seat map to one pattern. Random per request when unset.
    pub seed: Option<u64>,
}

fn default_booked_probability() -> f64 { 0.3 }

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            booked_probability: default_booked_probability(),
            seed: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// `{dir}/default`, then the optional `{dir}/{RUN_MODE}` and `{dir}/local`
    /// files, then `BUSTRACK_*` environment variables (`__` between levels).
    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", dir)))
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            .add_source(config::Environment::with_prefix("BUSTRACK").prefix_separator("_").separator("__"))
            .build()?;

        let config: Self = s.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let probability = self.inventory.booked_probability;
        if !(0.0..=1.0).contains(&probability) {
            return Err(config::ConfigError::Message(format!(
                "inventory.booked_probability must be between 0 and 1, got {}",
                probability
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_defaults() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../config");
        let config = Config::load_from(dir).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.latency.search(), Duration::from_millis(1000));
        assert_eq!(config.latency.booking(), Duration::from_millis(1500));
        assert!((config.inventory.booked_probability - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.inventory.seed, None);
    }

    #[test]
    fn test_booked_probability_must_be_a_fraction() {
        let mut config = Config {
            server: ServerConfig { port: 8080 },
            latency: LatencyConfig::default(),
            inventory: InventoryConfig::default(),
        };
        assert!(config.validate().is_ok());

        config.inventory.booked_probability = f64::NAN;
        assert!(config.validate().is_err());

        config.inventory.booked_probability = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_default_file_fails() {
        assert!(Config::load_from("/nonexistent/bustrack").is_err());
    }
}
