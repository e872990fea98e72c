//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod render;
pub mod search;
pub mod serve;
pub mod version;

use crate::cli::args::{Cli, Commands, SiteArgs};
use crate::config::{self, SiteConfig};
use crate::error::DocdeckError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), DocdeckError> {
    match cli.command {
        Commands::Render(args) => render::run(&args).await,
        Commands::Search(args) => search::run(&args).await,
        Commands::Serve(args) => serve::run(&args).await,
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

/// Loads the site configuration with CLI overrides applied.
pub(crate) fn site_config(args: &SiteArgs) -> Result<SiteConfig, DocdeckError> {
    let mut config = config::load_config(args.config.as_deref())?;
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
        config::validate(&config)?;
    }
    Ok(config)
}
