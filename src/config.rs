use crate::*;
use confique::Config as _;
use std::path::PathBuf;

/// Optional configuration file read from the working directory.
pub const CONFIG_FILE: &str = "sqldaily.toml";

#[derive(Debug, confique::Config)]
pub struct Config {
    /// Path of the frozen problem catalogue.
    #[config(env = "SQLDAILY_DATASET", default = "assets/questions.json")]
    pub dataset: PathBuf,

    /// Where the rendered markup goes; stdout when unset.
    #[config(env = "SQLDAILY_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Number of distinct sources kept per highlighter cache.
    #[config(env = "SQLDAILY_CACHE_CAPACITY", default = 1024)]
    pub cache_capacity: u64,
}

impl Config {
    /// Load from the environment first, then [`CONFIG_FILE`] if present, then defaults.
    pub fn load() -> Result<Self> {
        let config = Self::builder().env().file(CONFIG_FILE).load()?;
        debug!("Loaded configuration {config:?}");
        Ok(config)
    }
}
