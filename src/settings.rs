use config::{Config, ConfigError, Environment, Source};
use serde::Deserialize;

/// Runtime knobs read from `TAXONOMY_*` environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Records handed to rayon per progress-bar step.
    pub chunk_size: usize,
    /// Worker threads; 0 leaves rayon's default in place.
    pub threads: usize,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_source(Environment::with_prefix("TAXONOMY").try_parsing(true))
    }

    fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let settings: Settings = Config::builder()
            .set_default("chunk_size", 500)?
            .set_default("threads", 0)?
            .add_source(source)
            .build()?
            .try_deserialize()?;
        Ok(settings.normalized())
    }

    fn normalized(mut self) -> Self {
        if self.chunk_size == 0 {
            self.chunk_size = 500;
        }
        self
    }
}
