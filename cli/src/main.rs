//! tgdoc CLI - Word to Telegram markup converter

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use tgdoc::render::ConversionStats;
use tgdoc::{Converter, JsonFormat, OutputFormat};

#[derive(Parser)]
#[command(name = "tgdoc")]
#[command(version)]
#[command(about = "Convert Word documents to Telegram MarkdownV2", long_about = None)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    convert: ConvertArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by every converting command.
#[derive(Args, Clone, Copy, Debug)]
struct ConvertArgs {
    /// Escape with the narrower reserved set of earlier bot releases
    #[arg(long, global = true, env = "TGDOC_LEGACY_ESCAPE")]
    legacy_escape: bool,

    /// Maximum heading level (1-6)
    #[arg(long, global = true, default_value = "6", env = "TGDOC_MAX_HEADING")]
    max_heading: u8,

    /// Skip malformed styles or properties instead of failing
    #[arg(long, global = true)]
    lenient: bool,
}

impl ConvertArgs {
    fn converter(&self) -> Converter {
        let mut converter = Converter::new().with_max_heading(self.max_heading);
        if self.legacy_escape {
            converter = converter.with_legacy_escaping();
        }
        if self.lenient {
            converter = converter.lenient();
        }
        converter
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert DOCX to all formats (markup, text, JSON)
    Convert {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Convert DOCX to Telegram MarkdownV2
    #[command(alias = "md")]
    Markdown {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert DOCX to plain text
    Text {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert DOCX to JSON
    Json {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print metadata and statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert many files to markup in parallel
    Batch {
        /// Input DOCX files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// Worker threads (defaults to the number of CPUs)
        #[arg(short, long)]
        jobs: Option<usize>,
    },

    /// Show version information
    Version,
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let converter = cli.convert.converter();

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => {
            cmd_convert(&converter, &input, output.as_deref())
        }
        Some(Commands::Markdown { input, output }) => cmd_write(
            &converter,
            &input,
            output.as_deref(),
            OutputFormat::Markdown,
        ),
        Some(Commands::Text { input, output }) => {
            cmd_write(&converter, &input, output.as_deref(), OutputFormat::Text)
        }
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => {
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            cmd_write(
                &converter,
                &input,
                output.as_deref(),
                OutputFormat::Json(format),
            )
        }
        Some(Commands::Info { input, json }) => cmd_info(&converter, &input, json),
        Some(Commands::Batch {
            inputs,
            output,
            jobs,
        }) => cmd_batch(&converter, &inputs, &output, jobs),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&converter, &input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: tgdoc <FILE> [OUTPUT]".yellow());
                println!("       tgdoc --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(converter: &Converter, input: &Path, output: Option<&Path>) -> CliResult {
    let output_dir = output.map(Path::to_path_buf).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Parsing DOCX...");
    let doc = converter.parse_file(input)?;
    pb.inc(1);

    pb.set_message("Generating markup...");
    let markup = converter.convert_document(&doc, OutputFormat::Markdown)?;
    fs::write(output_dir.join("message.md"), &markup.content)?;
    pb.inc(1);

    pb.set_message("Generating text...");
    let text = converter.convert_document(&doc, OutputFormat::Text)?;
    fs::write(output_dir.join("message.txt"), &text.content)?;
    pb.inc(1);

    pb.set_message("Generating JSON...");
    let json = converter.convert_document(&doc, OutputFormat::Json(JsonFormat::Pretty))?;
    fs::write(output_dir.join("content.json"), &json.content)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{} {}", "Output files:".green().bold(), output_dir.display());
    println!("  {} message.md ({} bytes)", "├─".dimmed(), markup.content_len());
    println!("  {} message.txt ({} bytes)", "├─".dimmed(), text.content_len());
    println!("  {} content.json ({} bytes)", "└─".dimmed(), json.content_len());

    Ok(())
}

fn cmd_write(
    converter: &Converter,
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
) -> CliResult {
    let doc = converter.parse_file(input)?;
    let result = converter.convert_document(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &result.content)?;
        println!(
            "{} {} ({} bytes)",
            "Saved to".green(),
            path.display(),
            result.content_len()
        );
    } else {
        println!("{}", result.content);
    }

    Ok(())
}

fn cmd_info(converter: &Converter, input: &Path, as_json: bool) -> CliResult {
    let doc = converter.parse_file(input)?;
    let result = tgdoc::render::to_markdown_with_stats(&doc, converter.render_options())?;

    if as_json {
        let info = serde_json::json!({
            "file": input.display().to_string(),
            "metadata": result.metadata,
            "stats": result.stats,
            "markup_length": result.content.chars().count(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    let metadata = &result.metadata;
    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), tgdoc::DocFormat::Docx);

    if let Some(ref title) = metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref subject) = metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref modified_by) = metadata.last_modified_by {
        println!("{}: {}", "Last modified by".bold(), modified_by);
    }
    if let Some(ref created) = metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = metadata.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    let stats = &result.stats;
    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Paragraphs".bold(), metadata.paragraph_count);
    println!("{}: {}", "Rendered".bold(), stats.paragraph_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Code".bold(), stats.code_count);
    println!("{}: {}", "Quotes".bold(), stats.quote_count);
    println!("{}: {}", "Empty (skipped)".bold(), stats.skipped_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
    println!(
        "{}: {}",
        "Markup length".bold(),
        result.content.chars().count()
    );

    Ok(())
}

fn cmd_batch(
    converter: &Converter,
    inputs: &[PathBuf],
    output_dir: &Path,
    jobs: Option<usize>,
) -> CliResult {
    fs::create_dir_all(output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = jobs {
        builder = builder.num_threads(jobs);
    }
    let pool = builder.build()?;

    let summary = pool.install(|| convert_batch(converter, inputs, output_dir, &pb));
    pb.finish_and_clear();

    for (path, error) in &summary.failures {
        eprintln!("{} {}: {}", "Failed".red(), path.display(), error);
    }
    println!(
        "{} {} of {} files converted",
        "Done!".green().bold(),
        summary.converted,
        inputs.len()
    );
    let totals = &summary.totals;
    println!(
        "{}: {} paragraphs, {} headings, {} words",
        "Total".bold(),
        totals.paragraph_count,
        totals.heading_count,
        totals.word_count
    );

    if summary.failures.is_empty() {
        Ok(())
    } else {
        Err(format!("{} file(s) failed to convert", summary.failures.len()).into())
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
struct BatchSummary {
    converted: usize,
    /// Stats of every converted file added together
    totals: ConversionStats,
    failures: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    fn record(&mut self, input: PathBuf, outcome: Result<ConversionStats, String>) {
        match outcome {
            Ok(stats) => {
                self.converted += 1;
                self.totals.merge(&stats);
            }
            Err(e) => self.failures.push((input, e)),
        }
    }
}

/// Convert every input into `output_dir`.
fn convert_batch(
    converter: &Converter,
    inputs: &[PathBuf],
    output_dir: &Path,
    pb: &ProgressBar,
) -> BatchSummary {
    let outcomes: Vec<_> = inputs
        .par_iter()
        .map(|input| {
            let outcome = fs::read(input)
                .map_err(|e| e.to_string())
                .and_then(|data| converter.convert_with_stats(&data).map_err(|e| e.to_string()))
                .and_then(|result| {
                    fs::write(output_path(input, output_dir), result.content)
                        .map(|()| result.stats)
                        .map_err(|e| e.to_string())
                });
            pb.inc(1);
            if outcome.is_ok() {
                log::debug!("Converted {}", input.display());
            }
            (input.clone(), outcome)
        })
        .collect();

    let mut summary = BatchSummary::default();
    for (input, outcome) in outcomes {
        summary.record(input, outcome);
    }
    summary
}

fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    output_dir.join(format!(
        "{}.{}",
        stem,
        OutputFormat::Markdown.extension()
    ))
}

fn cmd_version() {
    println!("{} {}", "tgdoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Word to Telegram MarkdownV2 converter");
    println!();
    println!("License: MIT");
}
