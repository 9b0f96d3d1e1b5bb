//! Innovation Explorer CLI
//!
//! Runs one mock innovation search and writes the text and PDF reports.
//! Logs go to stderr; stdout lists the written files and headline KPIs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use market_agents::build_master_agent;
use report_engine::{report_file_name, RenderConfig, ReportGenerator};
use shared_types::{KpiCard, SearchQuery};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "innovation-cli")]
#[command(version, about = "Mock pharma innovation search with report export")]
struct Args {
    /// Molecule name, e.g. pregabalin
    molecule: String,

    /// Primary indication
    #[arg(short, long, default_value = "")]
    indication: String,

    /// Target geography
    #[arg(short, long, default_value = "US")]
    geography: String,

    /// Directory for the report files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Render settings (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write the report payload as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Files written by one run
#[derive(Debug)]
struct RunOutput {
    files: Vec<PathBuf>,
    kpis: Vec<KpiCard>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = run(&args)?;

    for kpi in &output.kpis {
        println!("{}: {} ({})", kpi.label, kpi.value, kpi.detail);
    }
    for file in &output.files {
        println!("Wrote {}", file.display());
    }

    Ok(())
}

fn run(args: &Args) -> anyhow::Result<RunOutput> {
    let query = SearchQuery::new(&args.molecule, &args.indication, &args.geography)?;

    let config = match &args.config {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };

    let payload = build_master_agent().run(&query);
    let artifacts = ReportGenerator::new(config)
        .generate(&payload)
        .context("Failed to generate report")?;

    if artifacts.stats.truncated {
        tracing::warn!(
            "Report did not fit on one page; PDF truncated after {} lines",
            artifacts.stats.lines_drawn
        );
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    let mut files = vec![
        write_file(
            &args.out_dir,
            &report_file_name(&query.molecule, &query.indication, "txt"),
            &artifacts.text,
        )?,
        write_file(
            &args.out_dir,
            &report_file_name(&query.molecule, &query.indication, "pdf"),
            &artifacts.pdf,
        )?,
    ];

    if args.json {
        let json = serde_json::to_vec_pretty(&payload).context("Failed to serialize payload")?;
        files.push(write_file(
            &args.out_dir,
            &report_file_name(&query.molecule, &query.indication, "json"),
            &json,
        )?);
    }

    Ok(RunOutput {
        files,
        kpis: payload.kpis(),
    })
}

fn write_file(dir: &Path, name: &str, contents: &[u8]) -> anyhow::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(out_dir: &Path, molecule: &str, json: bool) -> Args {
        Args {
            molecule: molecule.to_string(),
            indication: "neuropathic pain".to_string(),
            geography: "US".to_string(),
            out_dir: out_dir.to_path_buf(),
            config: None,
            json,
            verbose: false,
        }
    }

    #[test]
    fn test_writes_text_and_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let output = run(&args(dir.path(), "pregabalin", false)).unwrap();

        assert_eq!(output.files.len(), 2);
        let text = fs::read_to_string(
            dir.path()
                .join("pregabalin_neuropathic pain_innovation_report.txt"),
        )
        .unwrap();
        assert!(text.starts_with("Innovation Report: pregabalin"));

        let pdf = fs::read(dir.path().join("pregabalin_neuropathic pain_innovation_report.pdf"))
            .unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert_eq!(output.kpis.len(), 4);
    }

    #[test]
    fn test_json_payload_is_optional() {
        let dir = tempfile::tempdir().unwrap();
        let output = run(&args(dir.path(), "pregabalin", true)).unwrap();

        assert_eq!(output.files.len(), 3);
        let json = fs::read_to_string(&output.files[2]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["molecule"], "pregabalin");
    }

    #[test]
    fn test_blank_molecule_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&args(dir.path(), "  ", false)).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a molecule name.");
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["innovation-cli", "pregabalin", "-i", "pain", "--json"])
            .unwrap();
        assert_eq!(args.molecule, "pregabalin");
        assert_eq!(args.indication, "pain");
        assert_eq!(args.geography, "US");
        assert!(args.json);
    }
}
