//! Configuration of [`ManipulatorEnv`](crate::ManipulatorEnv).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`ManipulatorEnv`](crate::ManipulatorEnv).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct ManipulatorEnvConfig {
    /// Episodes are truncated after this many steps.
    pub max_steps: Option<usize>,

    /// Engine steps per environment step.
    pub frame_skip: usize,

    /// Weight of the squared clipped action in the reward.
    pub ctrl_cost_weight: f64,

    /// Overrides the asset id of the task.
    pub asset_id: Option<String>,
}

impl Default for ManipulatorEnvConfig {
    fn default() -> Self {
        Self {
            max_steps: Some(150),
            frame_skip: 1,
            ctrl_cost_weight: 0.0,
            asset_id: None,
        }
    }
}

impl ManipulatorEnvConfig {
    /// Sets the maximum number of steps in an episode.
    pub fn max_steps(mut self, v: Option<usize>) -> Self {
        self.max_steps = v;
        self
    }

    /// Sets the number of engine steps per environment step.
    pub fn frame_skip(mut self, v: usize) -> Self {
        self.frame_skip = v;
        self
    }

    /// Sets the weight of the control cost.
    pub fn ctrl_cost_weight(mut self, v: f64) -> Self {
        self.ctrl_cost_weight = v;
        self
    }

    /// Sets the asset id passed to the asset loader.
    pub fn asset_id(mut self, v: impl Into<String>) -> Self {
        self.asset_id = Some(v.into());
        self
    }

    /// Constructs [`ManipulatorEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`ManipulatorEnvConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_config() -> Result<()> {
        let config = ManipulatorEnvConfig::default()
            .max_steps(Some(50))
            .frame_skip(4)
            .ctrl_cost_weight(0.1)
            .asset_id("pusher.xml");

        let dir = TempDir::new("manipulator_env_config")?;
        let path = dir.path().join("env.yaml");
        config.save(&path)?;
        let config_ = ManipulatorEnvConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }
}
