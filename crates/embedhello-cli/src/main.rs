//! embedhello CLI — prints a greeting and the assets compiled into the binary.
//!
//! Output, in order:
//! 1. the greeting for `World`
//! 2. the bound asset (`hello.txt`)
//! 3. the same asset read back through the text group
//!
//! A failed asset read is fatal: the error goes to stderr and the exit code is 1.

mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use embedhello_core::assets::{self, embedded, AssetStore};
use embedhello_core::greeting;
use embedhello_core::group::AssetGroup;

/// Name passed to the greeting.
const GREETING_NAME: &str = "World";

#[derive(Parser)]
#[command(
    name = "embedhello",
    about = "Prints a greeting and the text assets bundled into the binary",
    version
)]
struct Cli {
    /// Verbosity level on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Any other arguments are accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(embedded::HELLO_TXT_NAME) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Print the greeting, the bound asset, then `name` read through the text group.
fn run(name: &str) -> Result<()> {
    output::print_block(&greeting::hello(GREETING_NAME));

    let bound = assets::bound_asset();
    tracing::debug!(name = embedded::HELLO_TXT_NAME, bytes = bound.len(), "bound asset");
    output::print_block(&String::from_utf8_lossy(bound));

    let asset = AssetStore::global()
        .get(AssetGroup::Text, name)
        .with_context(|| format!("failed to read {name}"))?;
    tracing::debug!(
        name = asset.name(),
        group = %asset.group(),
        bytes = asset.len(),
        sha256 = %asset.sha256(),
        "group asset"
    );
    output::print_block(&String::from_utf8_lossy(asset.as_bytes()));

    tracing::info!(
        groups = assets::list_asset_groups().len(),
        "printed greeting and bundled assets"
    );
    Ok(())
}
