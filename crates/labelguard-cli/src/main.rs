//! CLI entry point for labelguard.
//!
//! This module is intentionally thin: it handles argument parsing, file IO,
//! and exit codes. Verification logic lives in the library crates.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use labelguard_config::Format;
use labelguard_runtime::{Cancellation, DockerCli};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "labelguard",
    version,
    about = "Verify container image labels against a constraint document"
)]
struct Cli {
    /// Constraint document to verify (YAML, or JSON with a .json extension).
    config: Utf8PathBuf,

    /// Where to write the annotated document. Defaults to
    /// config_result.<extension of the input>.
    output: Option<Utf8PathBuf>,

    /// Abort the fetch phase after this many seconds.
    #[arg(long)]
    timeout: Option<u64>,

    /// Container runtime binary used to pull and inspect images.
    #[arg(long, default_value = "docker")]
    runtime: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let exit_code = run(&cli)?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

/// Exit codes follow the usual CI convention: 0 all checks passed, 2 some
/// check failed; hard errors propagate and exit 1.
fn run(cli: &Cli) -> anyhow::Result<i32> {
    if !cli.config.exists() {
        anyhow::bail!("constraint document does not exist: {}", cli.config);
    }

    let text = std::fs::read_to_string(&cli.config)
        .with_context(|| format!("read {}", cli.config))?;
    let mut set = labelguard_config::parse_str(Format::from_path(&cli.config), &text)
        .with_context(|| format!("parse {}", cli.config))?;

    let ctx = match cli.timeout {
        Some(seconds) => Cancellation::with_timeout(Duration::from_secs(seconds)),
        None => Cancellation::new(),
    };
    let runtime = DockerCli::with_program(&cli.runtime);

    labelguard_verify::verify(&mut set, &runtime, &ctx).context("verify labels")?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(&cli.config));
    let rendered = labelguard_config::to_string(Format::from_path(&output), &set)
        .context("serialize annotated document")?;
    std::fs::write(&output, rendered).with_context(|| format!("write {output}"))?;

    let tally = labelguard_domain::summary::tally(&set);
    eprintln!(
        "labelguard: {} checks evaluated, {} failed; results written to {}",
        tally.evaluated(),
        tally.failed,
        output
    );

    Ok(if tally.all_passed() { 0 } else { 2 })
}

fn default_output(config: &Utf8Path) -> Utf8PathBuf {
    match config.extension() {
        Some(ext) => Utf8PathBuf::from(format!("config_result.{ext}")),
        None => Utf8PathBuf::from("config_result"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_keeps_the_input_extension() {
        assert_eq!(
            default_output(Utf8Path::new("checks/labels.json")),
            Utf8PathBuf::from("config_result.json")
        );
        assert_eq!(
            default_output(Utf8Path::new("labels.yaml")),
            Utf8PathBuf::from("config_result.yaml")
        );
        assert_eq!(
            default_output(Utf8Path::new("labels")),
            Utf8PathBuf::from("config_result")
        );
    }
}
