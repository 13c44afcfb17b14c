// Adding the context method to errors:
use eyre::WrapErr;
use color_eyre::Result;
use serde::Deserialize;
use std::time::Duration;

// Everything in here can be overridden with
// environment variables (or the .env file)
// using the OSMNOTES_ prefix, for instance
// OSMNOTES_TIMEOUT_SECS=60.
const ENV_PREFIX: &'static str = "OSMNOTES";

#[derive(Debug, Deserialize)]
pub struct Config {
  pub api_url: String,
  // Used to build the note permalinks:
  pub viewer_url: String,
  pub timeout_secs: u64,
  pub max_body_bytes: u64,
  pub permalink_zoom: u32,
  pub permalink: bool
}

impl Config {

  pub fn from_env() -> Result<Config> {
    let mut c = Self::defaults()?;
    c.merge(config::Environment::with_prefix(ENV_PREFIX))?;
    // The error has to be given a context for
    // color_eyre to work here:
    c.try_into()
      .context("Loading configuration from env")
  }

  fn defaults() -> Result<config::Config> {
    let mut c = config::Config::new();
    // You have to use lowercase when compared
    // to what's in the .env file.
    c.set_default("api_url", "https://api.openstreetmap.org/api/0.6/notes.json")?;
    // Should never have a trailing slash.
    c.set_default("viewer_url", "https://www.openstreetmap.org")?;
    // The API can be really slow for large
    // bounding boxes:
    c.set_default("timeout_secs", 180)?;
    // 64 MB, a full page of 10000 notes stays
    // well under that.
    c.set_default("max_body_bytes", 67108864)?;
    c.set_default("permalink_zoom", 18)?;
    c.set_default("permalink", true)?;
    Ok(c)
  }

  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }

}
