//! Configuration loading from TOML files

mod constants;

pub use constants::{
    ArcherConstants, CombatConstants, GameConstants, InventoryConstants, MageConstants,
};

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why a set of game constants could not be loaded
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read constants file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Malformed constants TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid game constants: {0}")]
    ValidationError(String),
}

/// Read `path` and deserialize it as TOML
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    parse_toml(&fs::read_to_string(path)?)
}

pub fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load game constants from a TOML file and validate them
pub fn load_constants(path: &Path) -> Result<GameConstants, ConfigError> {
    let constants: GameConstants = load_toml(path)?;
    constants.validate()?;
    Ok(constants)
}
