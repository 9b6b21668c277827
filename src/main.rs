//! CLI entry point for the shapes fixtures.
//!
//! Runs the two sample programs and exposes each helper as a subcommand.
//! Main components: Cli parser, Commands enum and the `run` dispatcher.

use anyhow::Context;
use clap::{
    Parser, Subcommand, ValueEnum,
    builder::styling::{AnsiColor, Effects, Styles},
};
use shapes::demo::{self, build_shapes, summarize};
use shapes::display::{THEME, Theme, create_shape_table};
use shapes::io::{ExitCode, OutputFormat, OutputManager};
use shapes::report::{Computation, PointLine, Scalar, TotalArea};
use shapes::{
    Point, Rectangle, Settings, ShapeError, ShapeResult, add, calculate_area,
    calculate_total_area, create_point,
};
use std::path::PathBuf;
use tracing::info;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Geometry fixture runner
#[derive(Parser)]
#[command(
    name = "shapes",
    version = env!("CARGO_PKG_VERSION"),
    about = "Run the geometry fixture samples and their helpers",
    next_line_help = true,
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Sample {
    /// Integer point sample
    C,
    /// Floating-point shape sample
    Cpp,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Set up .shapes directory with default configuration
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Display active settings
    Config,

    /// Run one of the sample programs
    Demo {
        #[arg(value_enum)]
        sample: Sample,
    },

    /// Add two integers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },

    /// Area of a width by height rectangle
    Area {
        #[arg(allow_negative_numbers = true)]
        width: f64,
        #[arg(allow_negative_numbers = true)]
        height: f64,
    },

    /// Print an integer point
    Point {
        #[arg(allow_negative_numbers = true)]
        x: i32,
        #[arg(allow_negative_numbers = true)]
        y: i32,
    },

    /// Euclidean distance between two points
    Distance {
        #[arg(allow_negative_numbers = true)]
        x1: f64,
        #[arg(allow_negative_numbers = true)]
        y1: f64,
        #[arg(allow_negative_numbers = true)]
        x2: f64,
        #[arg(allow_negative_numbers = true)]
        y2: f64,
    },

    /// Describe rectangles given as WIDTHxHEIGHT
    #[command(after_help = "Examples:\n  shapes rect 10x5 3x4\n  shapes rect 10x5 3x4 --table")]
    Rect {
        #[arg(required = true)]
        rects: Vec<String>,

        /// Render as a table
        #[arg(long)]
        table: bool,
    },

    /// Total area of rectangles given as WIDTHxHEIGHT
    Total {
        rects: Vec<String>,
    },
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => match Settings::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Configuration error loading from {}: {e}", path.display());
                return ExitCode::from_error(&e).into();
            }
        },
        None => Settings::load().unwrap_or_else(|e| {
            eprintln!("Configuration error: {e}");
            eprintln!("Using default configuration.");
            Settings::default()
        }),
    };

    shapes::logging::init_logging(&settings.logging, cli.verbose);
    Theme::set_colors_allowed(settings.output.color);

    let format = OutputFormat::from_json_flag(cli.json || settings.output.format.is_json());
    let mut output = OutputManager::new(format);

    match run(&cli, &settings, &mut output) {
        Ok(code) => code.into(),
        Err(err) => match err.downcast_ref::<ShapeError>() {
            Some(shape_err) => output
                .error(shape_err)
                .unwrap_or_else(|_| ExitCode::from_error(shape_err))
                .into(),
            None => {
                eprintln!("Error: {err:#}");
                ExitCode::GeneralError.into()
            }
        },
    }
}

fn parse_rectangles(rects: &[String]) -> ShapeResult<Vec<[f64; 2]>> {
    rects
        .iter()
        .map(|s| {
            let rect: Rectangle = s.parse()?;
            Ok([rect.width(), rect.height()])
        })
        .collect()
}

fn run(cli: &Cli, settings: &Settings, output: &mut OutputManager) -> anyhow::Result<ExitCode> {
    let code = match &cli.command {
        Commands::Init { force } => {
            let path = Settings::init_config_file(*force)?;
            output.info(&THEME.success_with_icon(&format!(
                "Created configuration file at: {}",
                THEME.apply(&THEME.path, path.display())
            )))?;
            output.success(PathLine(path))?
        }

        Commands::Config => match output.format() {
            OutputFormat::Json => output.success(ConfigView(settings))?,
            OutputFormat::Text => {
                let toml_str = toml::to_string_pretty(settings)
                    .context("rendering configuration as TOML")?;
                output.info(&THEME.apply(&THEME.header, "Current Configuration:"))?;
                output.info(&"=".repeat(50))?;
                output.info(toml_str.trim_end())?;
                ExitCode::Success
            }
        },

        Commands::Demo { sample } => {
            info!(json = output.format().is_json(), "running sample");
            match (sample, output.format()) {
                (Sample::C, OutputFormat::Text) => {
                    demo::run_c_sample(&mut output.stdout())
                        .map_err(|e| ShapeError::io("writing sample output", e))?;
                    ExitCode::Success
                }
                (Sample::C, OutputFormat::Json) => {
                    let summary = demo::run_c_sample(&mut std::io::sink())
                        .map_err(|e| ShapeError::io("running sample", e))?;
                    output.success(summary)?
                }
                (Sample::Cpp, OutputFormat::Text) => {
                    demo::run_cpp_sample(&mut output.stdout(), &settings.demo.rectangles)
                        .map_err(|e| ShapeError::io("writing sample output", e))?;
                    ExitCode::Success
                }
                (Sample::Cpp, OutputFormat::Json) => {
                    let shapes = build_shapes(&settings.demo.rectangles);
                    output.success(summarize(&shapes))?
                }
            }
        }

        Commands::Add { a, b } => output.success(Computation {
            operation: "add",
            result: Scalar::Int(add(*a, *b)),
        })?,

        Commands::Area { width, height } => output.success(Computation {
            operation: "area",
            result: Scalar::Float(calculate_area(*width, *height)),
        })?,

        Commands::Point { x, y } => output.success(PointLine::from(&create_point(*x, *y)))?,

        Commands::Distance { x1, y1, x2, y2 } => output.success(Computation {
            operation: "distance",
            result: Scalar::Float(Point::new(*x1, *y1).distance(&Point::new(*x2, *y2))),
        })?,

        Commands::Rect { rects, table } => {
            let shapes = build_shapes(&parse_rectangles(rects)?);
            let report = summarize(&shapes);
            if *table && !output.format().is_json() {
                output.info(&create_shape_table(&report))?;
                ExitCode::Success
            } else {
                output.success(report)?
            }
        }

        Commands::Total { rects } => {
            let shapes = build_shapes(&parse_rectangles(rects)?);
            output.success(TotalArea {
                total_area: calculate_total_area(&shapes),
            })?
        }
    };

    Ok(code)
}

/// Path result for `init`; text mode already printed a styled line.
#[derive(serde::Serialize)]
struct PathLine(PathBuf);

impl std::fmt::Display for PathLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Edit this file to customize your settings.")
    }
}

/// Settings wrapper so JSON output serializes the struct directly.
#[derive(serde::Serialize)]
#[serde(transparent)]
struct ConfigView<'a>(&'a Settings);

impl std::fmt::Display for ConfigView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match toml::to_string_pretty(self.0) {
            Ok(s) => write!(f, "{s}"),
            Err(_) => Err(std::fmt::Error),
        }
    }
}
