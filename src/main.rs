mod app;
mod cli;
mod config;
mod error;
mod export;
mod notes;
mod utils;

use std::env;
use std::process;
use color_eyre::Result;
use dotenv::dotenv;
use eyre::WrapErr;
use log::{error, info};
use crate::app::Job;
use crate::cli::CliAction;
use crate::config::Config;

/**
 * Requests notes from the OSM database and
 * stores them into a CSV file.
 */
fn main() -> Result<()> {
  dotenv().ok();
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("warn")
  ).init();

  let args: Vec<String> = env::args().collect();
  let program = args.first()
    .cloned()
    .unwrap_or_else(|| String::from("osmnotes2csv"));
  let opts = cli::options();
  let cli_args = match cli::parse_args(&opts, &args) {
    CliAction::Run(a) => a,
    CliAction::Usage(message) => {
      if let Some(m) = message {
        println!("\nERROR:\n  {}", m);
      }
      print!("{}", cli::usage(&program, &opts));
      // Nothing has been opened yet, exiting
      // right here is fine.
      process::exit(1);
    }
  };

  let config = Config::from_env()?;
  info!("Using notes API at {}", config.api_url);

  let job = Job::new(&cli_args, &config);
  let summary = job.run()
    .map_err(|e| {
      error!("Conversion failed: {}", e);
      e
    })
    .context("Converting OSM notes to CSV")?;

  println!("  DONE : {}\n", summary);
  Ok(())
}
