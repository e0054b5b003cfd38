//! CLI entry point for policyguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and exit
//! codes. All business logic lives in the `policyguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use policyguard_app::{
    format_explanation, format_not_found, parse_report_json, render_annotations, render_markdown,
    run_check, run_explain, runtime_error_report, serialize_report, verdict_exit_code,
    CheckInput, ExplainOutput,
};
use policyguard_settings::Overrides;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "policyguard",
    version,
    about = "Resource validation policy pack for infrastructure previews"
)]
struct Cli {
    /// Path to policyguard config TOML (missing file means defaults).
    #[arg(long, default_value = "policyguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (mandatory|advisory).
    #[arg(long)]
    profile: Option<String>,

    /// Override which enforcement level fails the run (mandatory|advisory).
    #[arg(long)]
    fail_on: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    /// Log filter used when RUST_LOG is unset (e.g. warn, info, debug).
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate policy over a resources file and write artifacts.
    Check {
        /// JSON file with resource descriptions.
        #[arg(long)]
        resources: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/policyguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/policyguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/policyguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/policyguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a rule with remediation guidance.
    Explain {
        /// The rule name (e.g., "s3-no-public-read").
        identifier: String,
    },

    /// Print the JSON schema for policyguard.toml.
    ConfigSchema,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.cmd {
        Commands::Check {
            ref resources,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(&cli, resources, report_out, write_markdown, markdown_out),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
        Commands::ConfigSchema => cmd_config_schema(),
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_check(
    cli: &Cli,
    resources: &Utf8Path,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        // Missing config file is allowed (defaults apply).
        let cfg_text = match std::fs::read_to_string(&cli.config) {
            Ok(text) => text,
            Err(err) => {
                debug!(path = %cli.config, error = %err, "config not read; using defaults");
                String::new()
            }
        };

        let resources_text = std::fs::read_to_string(resources)
            .with_context(|| format!("read resources: {}", resources))?;

        let overrides = Overrides {
            profile: cli.profile.clone(),
            fail_on: cli.fail_on.clone(),
            max_findings: cli.max_findings,
        };

        let output = run_check(CheckInput {
            config_text: &cfg_text,
            resources_text: &resources_text,
            overrides,
        })?;

        write_report_file(report_out, &serialize_report(&output.report)?)
            .context("write report json")?;

        if write_markdown {
            let md = render_markdown(&output.report);
            write_text_file(markdown_out, &md).context("write markdown")?;
        }

        if let Some(reason) = &output.report.data.truncated_reason {
            warn!("{reason}");
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            if let Ok(bytes) = serialize_report(&report) {
                let _ = write_report_file(report_out, &bytes);
            }
            eprintln!("policyguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_annotations(&report, max) {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rules,
        } => {
            eprint!("{}", format_not_found(&identifier, available_rules));
            std::process::exit(1);
        }
    }
}

fn cmd_config_schema() -> anyhow::Result<()> {
    let schema = policyguard_settings::config_schema();
    let text = serde_json::to_string_pretty(&schema).context("serialize config schema")?;
    println!("{}", text);
    Ok(())
}
