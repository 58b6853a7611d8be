//! Command-line interface definitions for `notices-demo`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Simulates one request that records a single notification.
#[derive(Debug, Parser)]
#[command(name = "notices-demo")]
#[command(about = "Record a localised notification for one simulated request")]
#[command(version)]
pub struct Args {
    /// TOML file with `default_locale` and `supported_locales`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
    /// Locale hint as a client would send it (for example `en-GB`).
    #[arg(long, value_name = "HINT")]
    pub locale: Option<String>,
    /// Directory laid out as `<locale>/<domain>.ftl`.
    #[arg(long, value_name = "DIR", default_value = "locales")]
    pub locales_dir: Utf8PathBuf,
    /// Resource file stem to load from each locale directory.
    #[arg(long, value_name = "NAME", default_value = "shared")]
    pub domain: String,
    /// Message key to record.
    #[arg(value_name = "KEY")]
    pub key: String,
    /// Positional message arguments; numeric values are passed as numbers.
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}
