//!
//! src/main.rs
//!
//! Entry point for the album rating cli. Loads config once, then runs a
//! single interactive rating transaction.
//!
//!

mod cli;
mod config;
mod errors;
mod logging;
mod types;

mod identifier;
mod rating;
mod fetch;
mod credential;
mod catalog;
mod submit;
mod backend;
mod prompt;
mod gate;
mod pipeline;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use crate::errors::RaterError;

#[tokio::main]
async fn main() -> Result<ExitCode, RaterError> {
    let _args = cli::Cli::parse();

    let cfgs = config::load_config()?;
    let _logger = logging::init_logging(&cfgs.logging)?;

    tracing::info!(
        service = "album-rater",
        version = %env!("CARGO_PKG_VERSION"),
        "starting"
    );

    let backend = Arc::new(backend::HttpBackend::new(&cfgs)?);
    let mut pipeline = pipeline::Pipeline::new(backend, prompt::LinePrompter::stdio());
    let outcome = pipeline.run().await;

    println!("{}", outcome.report());
    if outcome.is_fatal() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
