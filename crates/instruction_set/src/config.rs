use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::addressing::default_labels;
use crate::errors::{Error, Result};

/// Looked up in the working directory by [Config::load_or_default].
pub const CONFIG_FILE_NAME: &str = "gen_instruction_set.toml";

const RESOURCES_DIR: &str = "../src/main/resources";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub exceptions: PathBuf,
    pub instruction_table: PathBuf,
    pub output: PathBuf,
    /// Labels for the opcode columns, in column order.
    pub addressing_modes: Vec<String>,
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        let resources = Path::new(RESOURCES_DIR);
        Self {
            exceptions: resources.join("exceptions.json"),
            instruction_table: resources.join("instruction_set.csv"),
            output: resources.join("instruction_set.json"),
            addressing_modes: default_labels(),
            pretty: false,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        toml::from_str(&data).map_err(|source| Error::Config {
            path: path.to_owned(),
            source,
        })
    }

    /// Use the config file at `path` if there is one, otherwise the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            info!("Loading config from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
