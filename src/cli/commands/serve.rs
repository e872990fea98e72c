//! Local host server command.

use crate::cli::args::ServeArgs;
use crate::cli::commands::site_config;
use crate::error::DocdeckError;
use crate::server;

/// Start the local documentation host.
///
/// # Errors
///
/// Returns an error on configuration problems or if the address cannot be
/// bound.
pub async fn run(args: &ServeArgs) -> Result<(), DocdeckError> {
    let config = site_config(&args.site)?;
    server::serve(&config, &args.http).await
}
