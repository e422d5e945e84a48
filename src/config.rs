//! Configuration management for AUMChain
//!
//! Observed deployments of this simulation disagree on a few constants
//! (genesis supply 50 vs 500, difficulty ceiling 5 vs 6), so all of them
//! live here as configuration rather than hard-coded facts. The defaults
//! below pick the 50 / 2..=6 lineage.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{ChainError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    #[serde(default = "default_shard_count")]
    pub shard_count: u32,
    #[serde(default)]
    pub difficulty: DifficultyConfig,
    #[serde(default)]
    pub supply: SupplyConfig,
    #[serde(default)]
    pub reward: RewardConfig,
    #[serde(default = "default_genesis_note")]
    pub genesis_note: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DifficultyConfig {
    /// Leading hex-zero count required of a freshly mined block.
    #[serde(default = "default_difficulty_initial")]
    pub initial: u32,
    #[serde(default = "default_difficulty_min")]
    pub min: u32,
    #[serde(default = "default_difficulty_max")]
    pub max: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupplyConfig {
    /// Cap on cumulative minted reward.
    #[serde(default = "default_supply_total")]
    pub total: f64,
    /// Supply already in circulation when the genesis block is created.
    #[serde(default = "default_supply_genesis")]
    pub genesis: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RewardConfig {
    #[serde(default = "default_reward_base")]
    pub base: f64,
    #[serde(default = "default_halving_interval")]
    pub halving_interval: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            shard_count: default_shard_count(),
            difficulty: DifficultyConfig::default(),
            supply: SupplyConfig::default(),
            reward: RewardConfig::default(),
            genesis_note: default_genesis_note(),
        }
    }
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            initial: default_difficulty_initial(),
            min: default_difficulty_min(),
            max: default_difficulty_max(),
        }
    }
}

impl Default for SupplyConfig {
    fn default() -> Self {
        Self {
            total: default_supply_total(),
            genesis: default_supply_genesis(),
        }
    }
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            base: default_reward_base(),
            halving_interval: default_halving_interval(),
        }
    }
}

impl ChainConfig {
    pub fn validate(&self) -> Result<()> {
        if self.shard_count == 0 {
            return Err(ChainError::InvalidConfig(
                "shard_count must be at least 1".to_string(),
            ));
        }
        if self.difficulty.min == 0 {
            return Err(ChainError::InvalidConfig(
                "difficulty.min must be at least 1".to_string(),
            ));
        }
        if self.difficulty.min > self.difficulty.max {
            return Err(ChainError::InvalidConfig(format!(
                "difficulty.min ({}) exceeds difficulty.max ({})",
                self.difficulty.min, self.difficulty.max
            )));
        }
        if self.difficulty.initial < self.difficulty.min
            || self.difficulty.initial > self.difficulty.max
        {
            return Err(ChainError::InvalidConfig(format!(
                "difficulty.initial ({}) outside [{}, {}]",
                self.difficulty.initial, self.difficulty.min, self.difficulty.max
            )));
        }
        if !self.supply.total.is_finite() || self.supply.total <= 0.0 {
            return Err(ChainError::InvalidConfig(
                "supply.total must be positive".to_string(),
            ));
        }
        if self.supply.genesis < 0.0 || self.supply.genesis > self.supply.total {
            return Err(ChainError::InvalidConfig(format!(
                "supply.genesis ({}) outside [0, supply.total ({})]",
                self.supply.genesis, self.supply.total
            )));
        }
        if !self.reward.base.is_finite() || self.reward.base < 0.0 {
            return Err(ChainError::InvalidConfig(
                "reward.base must be non-negative".to_string(),
            ));
        }
        if self.reward.halving_interval == 0 {
            return Err(ChainError::InvalidConfig(
                "reward.halving_interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load configuration from a TOML file, falling back to defaults when the
/// file is absent or empty.
pub fn load_config(path: impl AsRef<Path>) -> Result<ChainConfig> {
    let config_str = fs::read_to_string(path).unwrap_or_default();
    let config: ChainConfig = if config_str.is_empty() {
        ChainConfig::default()
    } else {
        toml::from_str(&config_str)?
    };
    config.validate()?;
    Ok(config)
}

fn default_shard_count() -> u32 {
    4
}

fn default_difficulty_initial() -> u32 {
    4
}

fn default_difficulty_min() -> u32 {
    2
}

fn default_difficulty_max() -> u32 {
    6
}

fn default_supply_total() -> f64 {
    21_000_000.0
}

fn default_supply_genesis() -> f64 {
    50.0
}

fn default_reward_base() -> f64 {
    50.0
}

fn default_halving_interval() -> u64 {
    210_000
}

fn default_genesis_note() -> String {
    "Genesis Transaction: AUM ledger launched".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = ChainConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.shard_count, 4);
        assert_eq!(config.difficulty.initial, 4);
        assert_eq!(config.difficulty.min, 2);
        assert_eq!(config.difficulty.max, 6);
        assert_eq!(config.supply.total, 21_000_000.0);
        assert_eq!(config.supply.genesis, 50.0);
        assert_eq!(config.reward.base, 50.0);
        assert_eq!(config.reward.halving_interval, 210_000);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config("definitely-not-a-real-config.toml").unwrap();
        assert_eq!(config.shard_count, 4);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("aum.toml");
        let mut file = fs::File::create(&path)?;
        writeln!(file, "shard_count = 2")?;
        writeln!(file)?;
        writeln!(file, "[difficulty]")?;
        writeln!(file, "initial = 3")?;
        writeln!(file, "max = 5")?;

        let config = load_config(&path)?;
        assert_eq!(config.shard_count, 2);
        assert_eq!(config.difficulty.initial, 3);
        assert_eq!(config.difficulty.min, 2);
        assert_eq!(config.difficulty.max, 5);
        assert_eq!(config.supply.genesis, 50.0);
        Ok(())
    }

    #[test]
    fn inverted_difficulty_bounds_rejected() {
        let mut config = ChainConfig::default();
        config.difficulty.min = 5;
        config.difficulty.max = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn initial_difficulty_outside_bounds_rejected() {
        let mut config = ChainConfig::default();
        config.difficulty.initial = 9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn genesis_supply_above_cap_rejected() {
        let mut config = ChainConfig::default();
        config.supply.genesis = config.supply.total + 1.0;
        assert!(config.validate().is_err());
    }
}
