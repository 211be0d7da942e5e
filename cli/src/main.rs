//! typeflow CLI - story pagination tool

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use typeflow::{
    from_story_text, to_json, to_text, CharCountMeasurer, Document, JsonFormat, LayoutResult,
    PageGeometry, Paginator, RenderOptions,
};

#[derive(Parser)]
#[command(name = "typeflow")]
#[command(version)]
#[command(about = "Paginate story text into fixed-size right-to-left pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a plain-text page preview
    Layout {
        /// Input story text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Prefix each line with its page and coordinates
        #[arg(long)]
        coordinates: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Emit the layout as JSON
    Json {
        /// Input story text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show page, line, and warning counts
    Info {
        /// Input story text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Document title (defaults to the file stem)
    #[arg(long)]
    title: Option<String>,

    /// Pin the footer generation date (defaults to today)
    #[arg(long, value_name = "DATE")]
    date: Option<String>,

    /// Page width in page units
    #[arg(long, default_value = "210")]
    page_width: f32,

    /// Page height in page units
    #[arg(long, default_value = "297")]
    page_height: f32,

    /// Margin applied to all four sides
    #[arg(long, default_value = "20")]
    margin: f32,

    /// Vertical advance per line
    #[arg(long, default_value = "7")]
    line_height: f32,

    /// Average character width as a fraction of the font size
    #[arg(long, default_value = "0.6")]
    char_width_ratio: f32,
}

impl LayoutArgs {
    fn geometry(&self) -> PageGeometry {
        PageGeometry {
            page_width: self.page_width,
            page_height: self.page_height,
            margin_left: self.margin,
            margin_right: self.margin,
            margin_top: self.margin,
            margin_bottom: self.margin,
            line_height: self.line_height,
            ..PageGeometry::a4()
        }
    }

    fn paginate(&self, input: &Path) -> typeflow::Result<LayoutResult> {
        let document = read_story(input, self.title.as_deref())?;
        log::info!(
            "paginating {:?}: {} sections",
            input,
            document.section_count()
        );

        let mut paginator = Paginator::new(CharCountMeasurer::with_ratio(self.char_width_ratio))
            .with_geometry(self.geometry());
        if let Some(ref date) = self.date {
            paginator = paginator.with_generation_date(date.clone());
        }
        paginator.paginate(&document)
    }
}

/// Read a story text file into a document, defaulting the title to the
/// file stem.
fn read_story(input: &Path, title: Option<&str>) -> typeflow::Result<Document> {
    let text = fs::read_to_string(input)?;
    let title = title
        .map(str::to_string)
        .or_else(|| {
            input
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_default();
    Ok(from_story_text(title, &text))
}

fn write_output(content: &str, output: Option<&Path>) -> typeflow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("{} {}", "Saved".green().bold(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn print_warnings(layout: &LayoutResult) {
    for warning in &layout.warnings {
        eprintln!("{} {:?}", "warning:".yellow().bold(), warning);
    }
}

fn run(cli: Cli) -> typeflow::Result<()> {
    match cli.command {
        Commands::Layout {
            input,
            output,
            coordinates,
            layout,
        } => {
            let result = layout.paginate(&input)?;
            print_warnings(&result);
            let options = RenderOptions::new().with_coordinates(coordinates);
            write_output(&to_text(&result, &options)?, output.as_deref())
        }

        Commands::Json {
            input,
            output,
            compact,
            layout,
        } => {
            let result = layout.paginate(&input)?;
            print_warnings(&result);
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            write_output(&to_json(&result, format)?, output.as_deref())
        }

        Commands::Info { input, layout } => {
            let geometry = layout.geometry();
            let result = layout.paginate(&input)?;
            println!("{}", "Layout".bold());
            println!(
                "  page:      {} x {} (printable {} x {})",
                geometry.page_width,
                geometry.page_height,
                geometry.printable_width(),
                geometry.printable_height()
            );
            println!("  pages:     {}", result.total_pages);
            println!("  lines:     {}", result.line_count());
            println!("  warnings:  {}", result.warnings.len());
            print_warnings(&result);
            Ok(())
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}
