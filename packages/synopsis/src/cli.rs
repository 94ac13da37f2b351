//! Command-line interface for the synopsis generator.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{ReportConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_TITLE};
use crate::error::Result;
use crate::indexer::{IdentifierIndex, IndexEntry};
use crate::loader::load_segments;
use crate::report::{render_report_with_progress, write_report};

/// DA Synopsis - Compare a draft and an adopted delegated act as an HTML report.
#[derive(Parser)]
#[command(name = "da-synopsis")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the comparison report.
    Render {
        /// Aligned segment dataset (CSV)
        #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// Output HTML file
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Document title
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,

        /// HTML fragment shown below the table of contents
        #[arg(long)]
        intro: Option<PathBuf>,

        /// Escape dataset text instead of treating it as HTML
        #[arg(long)]
        escape_text: bool,

        /// Omit the generation date footer
        #[arg(long)]
        no_footer: bool,
    },

    /// List the recitals and articles found in the dataset.
    Toc {
        /// Aligned segment dataset (CSV)
        #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            title,
            intro,
            escape_text,
            no_footer,
        } => {
            let mut config = ReportConfig::new()
                .with_title(title)
                .with_escape_text(escape_text);
            if let Some(path) = intro {
                config = config.with_intro(std::fs::read_to_string(path)?);
            }
            if !no_footer {
                config = config.with_generated_on(chrono::Local::now().format("%Y-%m-%d").to_string());
            }
            render_command(&input, &output, &config)
        }
        Commands::Toc { input } => toc_command(&input),
    }
}

/// Execute the render command.
fn render_command(input: &Path, output: &Path, config: &ReportConfig) -> Result<()> {
    println!(
        "{} {} into {}",
        style("Comparing").bold(),
        style(input.display()).cyan(),
        style(output.display()).green()
    );
    println!();

    let segments = load_segments(input)?;

    let pb = ProgressBar::new(segments.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Rendering segments...");

    let report = render_report_with_progress(&segments, config, || pb.inc(1));
    pb.finish_and_clear();

    println!("  Segments: {}", report.summary.rows);
    println!("  Recitals: {}", report.summary.recitals);
    println!("  Articles: {}", report.summary.articles);
    println!("  Anchors: {}", report.summary.anchors);

    write_report(output, &report.html)?;

    println!();
    println!("{} {}", style("Saved to:").green().bold(), output.display());

    Ok(())
}

/// Execute the toc command.
fn toc_command(input: &Path) -> Result<()> {
    let segments = load_segments(input)?;
    let index = IdentifierIndex::build(&segments);

    print_section("Recitals", index.recitals());
    print_section("Articles", index.articles());
    Ok(())
}

fn print_section(name: &str, entries: &[IndexEntry]) {
    println!("{} ({})", style(name).bold(), entries.len());
    for entry in entries {
        println!("  {:<12} {}", style(&entry.key).cyan(), entry.label);
    }
}
