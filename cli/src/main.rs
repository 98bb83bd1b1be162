//! unprose CLI - analysis text structuring tool

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unprose::{
    detect_input, parse_response_json, parse_with_options, Analysis, BlockStats, Cleaner,
    CleanupOptions, CleanupPreset, InputKind, JsonFormat, ParseOptions, RecommendationResponse,
    RenderOptions,
};

#[derive(Parser)]
#[command(name = "unprose")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Turn AI-generated analysis text into JSON, HTML, and plain text", long_about = None)]
struct Cli {
    /// Input file (analysis text or response JSON, "-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Text cleanup preset
    #[arg(long, value_enum)]
    cleanup: Option<CleanupLevel>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert to blocks as JSON
    Json {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Convert to HTML
    Html {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Wrap output in an analysis-content container
        #[arg(long)]
        container: bool,

        /// Emit one <li> per bullet without a surrounding <ul>
        #[arg(long)]
        no_group: bool,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Convert to plain text
    Text {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Marker placed before list items
        #[arg(long, default_value = "•")]
        marker: char,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Print the cleaned text without classifying it
    Clean {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Show block statistics
    Info {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Convert to all formats (JSON, HTML, text)
    Convert {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Collapse blank lines and trim only
    Minimal,
    /// Strip JSON fences, JSON sections and numeric arrays (default)
    Standard,
    /// Standard plus Unicode normalization and bullet standardization
    Aggressive,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
            CleanupLevel::Aggressive => CleanupPreset::Aggressive,
        }
    }
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Json {
            input,
            output,
            compact,
            cleanup,
        }) => cmd_json(&input, output.as_deref(), compact, cleanup),
        Some(Commands::Html {
            input,
            output,
            container,
            no_group,
            cleanup,
        }) => cmd_html(&input, output.as_deref(), container, !no_group, cleanup),
        Some(Commands::Text {
            input,
            output,
            marker,
            cleanup,
        }) => cmd_text(&input, output.as_deref(), marker, cleanup),
        Some(Commands::Clean {
            input,
            output,
            cleanup,
        }) => cmd_clean(&input, output.as_deref(), cleanup),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Convert {
            input,
            output,
            cleanup,
        }) => cmd_convert(&input, output.as_deref(), cleanup),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: JSON to stdout if input is provided
            if let Some(input) = cli.input {
                cmd_json(&input, None, false, cli.cleanup)
            } else {
                println!("{}", "Usage: unprose <FILE>".yellow());
                println!("       unprose --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read input text from a file, or from stdin when the path is `-`.
fn read_input(input: &Path) -> CliResult<String> {
    let bytes = if input.as_os_str() == "-" {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        bytes
    } else {
        fs::read(input)?
    };
    let text = String::from_utf8(bytes).map_err(unprose::Error::from)?;
    Ok(text)
}

fn parse_options(cleanup: Option<CleanupLevel>) -> ParseOptions {
    let preset = cleanup.map(CleanupPreset::from).unwrap_or_default();
    ParseOptions::new().with_cleanup_preset(preset)
}

/// Decode input text, unwrapping the analysis field of a response document.
fn load_text(text: String) -> CliResult<(String, Option<RecommendationResponse>)> {
    match detect_input(&text) {
        InputKind::Analysis => Ok((text, None)),
        InputKind::Response => {
            let response = parse_response_json(&text)?;
            log::debug!(
                "response input: {} products, {} recommended",
                response.products.len(),
                response.recommended_products.len()
            );
            Ok((response.ai_analysis.clone(), Some(response)))
        }
    }
}

fn load_analysis(input: &Path, cleanup: Option<CleanupLevel>) -> CliResult<Analysis> {
    let (text, _) = load_text(read_input(input)?)?;
    Ok(parse_with_options(&text, &parse_options(cleanup)))
}

fn write_output(output: Option<&Path>, content: &str) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    cleanup: Option<CleanupLevel>,
) -> CliResult<()> {
    let analysis = load_analysis(input, cleanup)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = unprose::render::to_json(&analysis, format)?;
    write_output(output, &json)
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    container: bool,
    group: bool,
    cleanup: Option<CleanupLevel>,
) -> CliResult<()> {
    let analysis = load_analysis(input, cleanup)?;

    let render_options = RenderOptions::new()
        .with_container(container)
        .with_list_grouping(group);

    let html = unprose::render::to_html(&analysis, &render_options);
    write_output(output, &html)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    marker: char,
    cleanup: Option<CleanupLevel>,
) -> CliResult<()> {
    let analysis = load_analysis(input, cleanup)?;

    let render_options = RenderOptions::new().with_list_marker(marker);
    let text = unprose::render::to_text(&analysis, &render_options);
    write_output(output, &text)
}

fn cmd_clean(input: &Path, output: Option<&Path>, cleanup: Option<CleanupLevel>) -> CliResult<()> {
    let (text, _) = load_text(read_input(input)?)?;
    let options = CleanupOptions::from_preset(cleanup.map(CleanupPreset::from).unwrap_or_default());
    let cleaned = Cleaner::new(options).process(&text);
    write_output(output, &cleaned)
}

fn cmd_info(input: &Path) -> CliResult<()> {
    let (text, response) = load_text(read_input(input)?)?;
    let analysis = parse_with_options(&text, &ParseOptions::default());
    let stats = BlockStats::from_analysis(&analysis);

    println!("{}", "Analysis Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!(
        "{}: {}",
        "Format".bold(),
        if response.is_some() {
            InputKind::Response
        } else {
            InputKind::Analysis
        }
    );
    println!("{}: {}", "Blocks".bold(), stats.block_count());
    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Recommendations".bold(), stats.recommendation_count);
    println!("{}: {}", "Bullets".bold(), stats.bullet_count);
    println!("{}: {}", "Numbered".bold(), stats.numbered_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);

    let titles = analysis.section_titles();
    if !titles.is_empty() {
        println!();
        println!("{}", "Sections".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for title in titles {
            println!("  {} {}", "•".dimmed(), title);
        }
    }

    if let Some(response) = response {
        println!();
        println!("{}", "Products".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}: {}", "Found".bold(), response.products.len());
        println!("{}: {}", "Recommended".bold(), response.recommended_products.len());
        for product in &response.recommended_products {
            println!(
                "  {} {} ({})",
                "★".yellow(),
                product.title,
                product.display_price()
            );
        }
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
    println!("{}: {}", "Emphasis spans".bold(), stats.emphasis_count);

    Ok(())
}

fn default_output_dir(input: &Path) -> PathBuf {
    if input.as_os_str() == "-" {
        return PathBuf::from("stdin_output");
    }
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    PathBuf::from(format!("{}_output", stem))
}

fn cmd_convert(input: &Path, output: Option<&Path>, cleanup: Option<CleanupLevel>) -> CliResult<()> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| default_output_dir(input));

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Parsing analysis...");
    let analysis = load_analysis(input, cleanup)?;
    pb.inc(1);

    pb.set_message("Generating JSON...");
    let json = unprose::render::to_json(&analysis, JsonFormat::Pretty)?;
    fs::write(output_dir.join("blocks.json"), &json)?;
    pb.inc(1);

    pb.set_message("Generating HTML...");
    let html = unprose::render::to_html(&analysis, &RenderOptions::new().with_container(true));
    fs::write(output_dir.join("analysis.html"), &html)?;
    pb.inc(1);

    pb.set_message("Generating text...");
    let text = unprose::render::to_text(&analysis, &RenderOptions::default());
    fs::write(output_dir.join("analysis.txt"), &text)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} blocks.json", "├─".dimmed());
    println!("  {} analysis.html", "├─".dimmed());
    println!("  {} analysis.txt", "└─".dimmed());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unprose".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Analysis text structuring tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unprose".dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.txt");
        fs::write(&path, "- cheap").unwrap();

        assert_eq!(read_input(&path).unwrap(), "- cheap");
    }

    #[test]
    fn test_read_input_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.txt");
        fs::write(&path, [0xFF, 0xFE]).unwrap();

        assert!(read_input(&path).is_err());
    }

    #[test]
    fn test_load_text_response() {
        let json = r#"{"products": [{"asin": "B01"}], "ai_analysis": "- cheap"}"#.to_string();
        let (text, response) = load_text(json).unwrap();

        assert_eq!(text, "- cheap");
        assert_eq!(response.unwrap().products.len(), 1);
    }

    #[test]
    fn test_load_text_plain() {
        let (text, response) = load_text("plain prose".to_string()).unwrap();
        assert_eq!(text, "plain prose");
        assert!(response.is_none());
    }

    #[test]
    fn test_cmd_convert_writes_all_formats() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("analysis.txt");
        fs::write(&input, "1. **Summary:** Good value.\n- cheap").unwrap();
        let out = dir.path().join("out");

        cmd_convert(&input, Some(&out), None).unwrap();

        assert!(out.join("blocks.json").exists());
        let html = fs::read_to_string(out.join("analysis.html")).unwrap();
        assert!(html.starts_with("<div class=\"analysis-content\">"));
        let text = fs::read_to_string(out.join("analysis.txt")).unwrap();
        assert_eq!(text, "Summary\nGood value.\n• cheap");
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["unprose", "text", "-", "--marker", "-"]).unwrap();
        match cli.command {
            Some(Commands::Text { input, marker, .. }) => {
                assert_eq!(input, PathBuf::from("-"));
                assert_eq!(marker, '-');
            }
            _ => panic!("expected text subcommand"),
        }

        let cli = Cli::try_parse_from(["unprose", "notes.txt", "--cleanup", "minimal"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.input, Some(PathBuf::from("notes.txt")));
        assert!(cli.cleanup == Some(CleanupLevel::Minimal));
    }

    #[test]
    fn test_default_output_dir() {
        assert_eq!(
            default_output_dir(Path::new("notes/report.txt")),
            PathBuf::from("report_output")
        );
        assert_eq!(default_output_dir(Path::new("-")), PathBuf::from("stdin_output"));
    }
}
