//! paraseg CLI - bounded paragraph segmentation tool

mod input;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use paraseg::packer::{DEFAULT_MAX_CHARS, DEFAULT_MAX_WORDS, DEFAULT_MIN_WORD_COUNT};
use paraseg::split::DEFAULT_SPLITTER;
use paraseg::{
    normalize, JsonFormat, PackerState, PageSelection, SegmentOptions, SegmentStats, Segmenter,
    SplitterRegistry,
};

#[derive(Parser)]
#[command(name = "paraseg")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Pack extracted page text into bounded paragraphs", long_about = None)]
struct Cli {
    /// Input text file (pages separated by form feed)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    segment: SegmentArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Segment page text into paragraph records
    #[command(alias = "seg")]
    Segment {
        /// Input text files ("-" or none for stdin)
        #[arg(value_name = "FILE")]
        inputs: Vec<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "jsonl")]
        format: OutputFormat,

        /// Keep numbering across input files instead of restarting at 1
        #[arg(long)]
        continue_numbering: bool,

        #[command(flatten)]
        segment: SegmentArgs,
    },

    /// Print normalized text, one page per line
    Normalize {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Page delimiter in the input
        #[arg(long, value_name = "STR")]
        page_delimiter: Option<String>,
    },

    /// Show segmentation statistics
    Stats {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        segment: SegmentArgs,
    },

    /// List available sentence splitters
    Splitters,

    /// Show version information
    Version,
}

/// Segmentation settings shared by commands.
#[derive(Args, Clone)]
struct SegmentArgs {
    /// Minimum words for a page to be segmented
    #[arg(long, env = "PARASEG_MIN_WORDS", default_value_t = DEFAULT_MIN_WORD_COUNT)]
    min_words: usize,

    /// Word ceiling per paragraph
    #[arg(long, env = "PARASEG_MAX_WORDS", default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,

    /// Character ceiling per paragraph
    #[arg(long, env = "PARASEG_MAX_CHARS", default_value_t = DEFAULT_MAX_CHARS)]
    max_chars: usize,

    /// Sentence splitter name
    #[arg(long, env = "PARASEG_SPLITTER", default_value = DEFAULT_SPLITTER)]
    splitter: String,

    /// Page range (e.g., "1-10", "1,3,5")
    #[arg(long)]
    pages: Option<String>,

    /// Page delimiter in the input (form feed by default)
    #[arg(long, value_name = "STR")]
    page_delimiter: Option<String>,

    /// Process pages on a single thread
    #[arg(long)]
    sequential: bool,
}

impl Default for SegmentArgs {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORD_COUNT,
            max_words: DEFAULT_MAX_WORDS,
            max_chars: DEFAULT_MAX_CHARS,
            splitter: DEFAULT_SPLITTER.to_string(),
            pages: None,
            page_delimiter: None,
            sequential: false,
        }
    }
}

impl SegmentArgs {
    fn build(&self) -> Result<Segmenter, Box<dyn std::error::Error>> {
        let page_selection = match self.pages.as_deref() {
            Some(p) => PageSelection::parse(p)?,
            None => PageSelection::All,
        };
        let options = SegmentOptions::new()
            .with_min_word_count(self.min_words)
            .with_max_words(self.max_words)
            .with_max_chars(self.max_chars);

        let segmenter = Segmenter::builder()
            .with_options(options)
            .with_splitter_name(&self.splitter)
            .with_pages(page_selection)
            .with_parallel(!self.sequential)
            .build()?;
        Ok(segmenter)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON array
    Pretty,
    /// Compact JSON array
    Compact,
    /// One JSON record per line
    Jsonl,
}

impl From<OutputFormat> for JsonFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Pretty => JsonFormat::Pretty,
            OutputFormat::Compact => JsonFormat::Compact,
            OutputFormat::Jsonl => JsonFormat::Lines,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Segment {
            inputs,
            output,
            format,
            continue_numbering,
            segment,
        }) => cmd_segment(
            &inputs,
            output.as_deref(),
            format,
            continue_numbering,
            &segment,
        ),
        Some(Commands::Normalize {
            input,
            page_delimiter,
        }) => cmd_normalize(input.as_deref(), page_delimiter.as_deref()),
        Some(Commands::Stats {
            input,
            json,
            segment,
        }) => cmd_stats(input.as_deref(), json, &segment),
        Some(Commands::Splitters) => {
            cmd_splitters();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: segment if input is provided
            if let Some(input) = cli.input {
                cmd_segment(
                    &[input],
                    cli.output.as_deref(),
                    OutputFormat::Jsonl,
                    false,
                    &cli.segment,
                )
            } else {
                println!("{}", "Usage: paraseg <FILE> [OUTPUT]".yellow());
                println!("       paraseg --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_segment(
    inputs: &[PathBuf],
    output: Option<&Path>,
    format: OutputFormat,
    continue_numbering: bool,
    args: &SegmentArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    // Fatal configuration problems surface before any input is read
    let segmenter = args.build()?;

    let sources: Vec<Option<&Path>> = if inputs.is_empty() {
        vec![None]
    } else {
        inputs.iter().map(|p| Some(p.as_path())).collect()
    };

    let pb = if output.is_some() {
        let pb = ProgressBar::new(sources.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut records = Vec::new();
    let mut totals = SegmentStats::new();
    let mut state = PackerState::new();

    for source in sources {
        let name = source.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
        pb.set_message(format!("Segmenting {}", name));

        let pages = input::read_pages(source, args.page_delimiter.as_deref())?;
        let (file_records, stats) = segmenter.segment_document(&mut state, pages);
        log::info!(
            "{}: {} paragraphs from {} pages",
            name,
            stats.paragraph_count,
            stats.pages_seen
        );
        records.extend(file_records);
        totals.merge(&stats);

        state = if continue_numbering {
            segmenter.finish_document(state)
        } else {
            PackerState::new()
        };
        pb.inc(1);
    }

    pb.finish_and_clear();
    input::write_records(output, &records, format.into())?;

    if let Some(path) = output {
        println!(
            "{} {} paragraphs from {} pages to {}",
            "Saved".green(),
            totals.paragraph_count,
            totals.pages_seen,
            path.display()
        );
    }

    Ok(())
}

fn cmd_normalize(
    input: Option<&Path>,
    page_delimiter: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let pages = input::read_pages(input, page_delimiter)?;
    for page in &pages {
        println!("{}", normalize(&page.text));
    }
    Ok(())
}

fn cmd_stats(
    input: Option<&Path>,
    json: bool,
    args: &SegmentArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let segmenter = args.build()?;
    let pages = input::read_pages(input, args.page_delimiter.as_deref())?;
    let page_total = pages.len();
    let mut state = PackerState::new();
    let (_, stats) = segmenter.segment_document(&mut state, pages);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Segmentation Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if let Some(path) = input {
        println!("{}: {}", "File".bold(), path.display());
    }
    println!("{}: {}", "Splitter".bold(), segmenter.packer().splitter().name());
    println!(
        "{}: min {} words, max {} words, max {} chars",
        "Thresholds".bold(),
        segmenter.options().min_word_count,
        segmenter.options().max_words,
        segmenter.options().max_chars
    );

    println!();
    println!("{}: {}", "Pages".bold(), page_total);
    println!("{}: {}", "Segmented".bold(), stats.pages_seen - stats.pages_skipped);
    println!("{}: {}", "Skipped".bold(), stats.pages_skipped);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
    println!(
        "{}: {:.1} words (max {})",
        "Paragraph size".bold(),
        stats.mean_paragraph_words(),
        stats.max_paragraph_words
    );

    Ok(())
}

fn cmd_splitters() {
    let registry = SplitterRegistry::with_defaults();
    println!("{}", "Sentence splitters".cyan().bold());
    for name in registry.names() {
        let marker = if name == DEFAULT_SPLITTER {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("  {} {}{}", "•".dimmed(), name, marker);
    }
}

fn cmd_version() {
    println!("{} {}", "paraseg".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Bounded paragraph segmentation tool");
    println!();
    println!("License: MIT");
}
