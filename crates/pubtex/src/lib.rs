//! pubtex
//!
//! Turns a JSON list of publications into the LaTeX `enumerate` fragment used
//! in a CV or report. Every field of a record is optional; each one present
//! contributes a fixed piece of markup in a fixed order.
//!
//! # Example
//!
//! ```no_run
//! use pubtex::{config::Config, run};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::new("pubs.json").with_output("pubs.tex");
//!     let count = run(&config)?;
//!     println!("wrote {count} publications");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod formatters;
pub mod input;
pub mod models;

pub use config::Config;
pub use error::{PubsError, Result};
pub use models::{InitialStyle, PublicationRecord, RecordKey};

/// Load the records named by `config` and write the LaTeX document.
///
/// Returns the number of records written. Input is fully parsed before the
/// output file is created, so a bad input document leaves the output alone.
pub fn run(config: &Config) -> Result<usize> {
    let records = input::load_records(&config.input)?;
    formatters::write_latex_file(&records, config.initial_style, &config.output)?;

    tracing::info!(
        records = records.len(),
        output = %config.output.display(),
        "Wrote publication list"
    );

    Ok(records.len())
}
