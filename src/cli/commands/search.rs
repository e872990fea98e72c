//! Search queries from the command line.

use std::sync::Arc;

use crate::cli::args::{OutputFormat, SearchArgs};
use crate::cli::commands::site_config;
use crate::error::DocdeckError;
use crate::fetch::HttpFetcher;
use crate::manifest::ManifestLoader;
use crate::search::SearchIndex;

/// Fetch the manifest, build the index, and print the matches.
///
/// # Errors
///
/// Returns an error on configuration problems or when the manifest cannot
/// be fetched; unlike the rendered UI there is no page to degrade into.
pub async fn run(args: &SearchArgs) -> Result<(), DocdeckError> {
    let config = site_config(&args.site)?;
    let fetcher = Arc::new(HttpFetcher::new(&config)?);

    let manifest = ManifestLoader::new(fetcher).load().await?;
    let index = SearchIndex::build(&manifest);
    let hits = index.query(&args.query);

    match args.format {
        OutputFormat::Human => {
            if hits.is_empty() {
                eprintln!("no matches for {:?}", args.query);
            }
            for record in hits {
                println!("{}/{}\t{}", record.section, record.title, record.path);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
    }
    Ok(())
}
