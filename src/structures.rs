use std::{fmt, fs::File, path::Path};

use poise::serenity_prelude as serenity;
use serde::Deserialize;
use serde_yaml::from_reader as parse_yaml;

use crate::vanity::PresenceTracker;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Failed reading `{path}`: {source}")]
  Read { path: String, source: std::io::Error },
  #[error("Failed parsing `{path}`: {source}")]
  Parse { path: String, source: serde_yaml::Error },
  #[error("Invalid configuration: {0}")]
  Invalid(&'static str),
}

fn default_status() -> String {
  "discord.gg/chillhive".into()
}

#[derive(Deserialize, Clone)]
pub struct Config {
  pub prefix: String,
  pub vanities: Vec<String>,
  pub role_id: u64,
  pub log_channel_id: u64,
  /// Shown as "Watching ..." once connected.
  #[serde(default = "default_status")]
  pub status: String,
  pub authentication: AuthConfig,
}

#[derive(Deserialize, Clone)]
pub struct AuthConfig {
  pub discord: String,
}

impl fmt::Debug for AuthConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AuthConfig").field("discord", &"<redacted>").finish()
  }
}

impl fmt::Debug for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config")
      .field("prefix", &self.prefix)
      .field("vanities", &self.vanities)
      .field("role_id", &self.role_id)
      .field("log_channel_id", &self.log_channel_id)
      .field("status", &self.status)
      .field("authentication", &self.authentication)
      .finish()
  }
}

impl Config {
  pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let config_file = File::open(path).map_err(|source| ConfigError::Read { path: display.clone(), source })?;
    let config: Config = parse_yaml(config_file).map_err(|source| ConfigError::Parse { path: display, source })?;

    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.authentication.discord.trim().is_empty() {
      return Err(ConfigError::Invalid("`authentication.discord` token is empty"));
    }
    if self.prefix.is_empty() {
      return Err(ConfigError::Invalid("`prefix` is empty"));
    }
    if self.role_id == 0 {
      return Err(ConfigError::Invalid("`role_id` must be a role snowflake"));
    }
    if self.log_channel_id == 0 {
      return Err(ConfigError::Invalid("`log_channel_id` must be a channel snowflake"));
    }
    if self.vanities.is_empty() {
      return Err(ConfigError::Invalid("`vanities` lists no substrings"));
    }
    // An empty substring is contained in every activity.
    if self.vanities.iter().any(String::is_empty) {
      return Err(ConfigError::Invalid("`vanities` contains an empty string"));
    }

    Ok(())
  }

  pub fn role_id(&self) -> serenity::RoleId {
    serenity::RoleId(self.role_id)
  }

  pub fn log_channel_id(&self) -> serenity::ChannelId {
    serenity::ChannelId(self.log_channel_id)
  }
}

/// Process-wide state, built once when the framework starts.
pub struct GlobalData {
  pub config: Config,
  pub presences: PresenceTracker,
}
