//! # easetab
//!
//! A CLI tool that prints a paste-ready fixture table of sampled
//! easing-function values.
//!
//! ## Overview
//!
//! easetab is built on top of easetablib and exists for one job: when the
//! expected-value tables in an easing library's test suite need to be
//! (re)generated, run it once and paste the output. It samples the 30
//! classic `ease*` functions at t = 0.0 through 1.0 in steps of 0.1 and
//! prints one bracketed, tab-indented row per function:
//!
//! ```text
//! [
//!     [ 0.0000,  0.0100,  0.0400, ...,  1.0000, ] //easeInQuad,
//!     ...
//! ]
//! ```
//!
//! The function list and sample grid are fixed at authoring time; the tool
//! takes no flags beyond `--help` and `--version`. Failures (an unknown
//! function name, a non-finite sample) abort the run with no partial
//! table, so a pasted block is always complete.
//!
//! ## Usage
//!
//! ```bash
//! easetab > /tmp/fixtures.txt
//! ```

use std::process::ExitCode;

use clap::Command;
use easetablib::{sample_table, Registry, FIXTURE_FUNCTIONS};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("easetab")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Prints a paste-ready fixture table of sampled easing-function values")
}

/// Generate the rendered fixture block.
fn run() -> anyhow::Result<String> {
    let registry = Registry::builtin();
    let table = sample_table(&registry, FIXTURE_FUNCTIONS)?;
    Ok(table.render())
}

fn main() -> ExitCode {
    // Parses --help/--version and rejects stray arguments.
    build_command().get_matches();

    match run() {
        Ok(block) => {
            println!("{block}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
