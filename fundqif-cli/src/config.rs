use anyhow::{Context, Result};
use fundqif_qif::Labels;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Optional `--config` TOML file. Every key is optional.
///
/// ```toml
/// [labels]
/// realized_gains = "Kursgewinne:Realisierte Gewinne"
/// other_income = "Kapitalerträge:sonstige Einnahme"
/// fee_category = "Depotkosten:Depotgebühren"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub labels: Labels,
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(p) = path else {
        return Ok(Config::default());
    };
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}
