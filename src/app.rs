use std::io::{self, Write};

use anyhow::Context as _;
use dirlist_domain::Listing;
use dirlist_infra::{AnsiStyler, StdDirectoryReader, SystemAccounts, default_ownership_resolver};
use dirlist_shared_kernel::Result;
use dirlist_usecase::CollectEntries;
use log::{debug, info};

use crate::config::Config;
use crate::presentation;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let colorize = config.colorize();
    let stdout = io::stdout();
    run_with(config, colorize, stdout.lock())
        .with_context(|| format!("cannot list {}", config.path.display()))?;
    Ok(())
}

/// Collects `config.path` and writes the rendered listing to `writer`.
pub fn run_with<W: Write>(config: &Config, colorize: bool, writer: W) -> Result<Listing> {
    let reader = StdDirectoryReader;
    let ownership = default_ownership_resolver();
    let accounts = SystemAccounts;
    let styler = AnsiStyler;

    debug!("listing {} (colorize={colorize})", config.path.display());
    let listing = CollectEntries::new(&reader, &ownership, &accounts, &styler)
        .run(&config.path, &config.collect_options(colorize))?;

    presentation::write_listing(writer, &listing.records, &config.render_options())?;

    if !listing.is_complete() {
        info!(
            "{}: {} entries listed, {} skipped",
            config.path.display(),
            listing.records.len(),
            listing.skipped.len()
        );
    }
    Ok(listing)
}
