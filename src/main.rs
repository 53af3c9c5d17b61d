//! Computes a blue noise sampling of a triangle mesh.
//!
//! Usage: bluenoise [OPTIONS] [INPUT]
//!
//! Without an input path, an STL mesh is read from standard input.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use bluenoise::load;
use bluenoise::sampler::{DEFAULT_OVERSAMPLE_FACTOR, DEFAULT_SAMPLE_COUNT};
use bluenoise::sink::{ObjSink, PngSink, PointSink};
use bluenoise::{Error, Mesh, Point, Result, SamplerBuilder};

#[derive(Parser)]
#[command(name = "bluenoise")]
#[command(version, about = "Compute a blue noise sampling of a triangle mesh", long_about = None)]
struct Cli {
    /// Input mesh file (.obj or .stl), reads from stdin if omitted
    input: Option<PathBuf>,

    /// Format of the mesh on stdin
    #[arg(long, value_enum, default_value = "stl")]
    stdin_format: StdinFormat,

    /// Number of samples to compute
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    sample_count: usize,

    /// Uniform candidates generated per sample before elimination
    #[arg(long, default_value_t = DEFAULT_OVERSAMPLE_FACTOR)]
    oversample: f64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Output files, .obj for a point cloud or .png for a rendering.
    /// Points are printed to stdout if none are given
    #[arg(short, long)]
    output: Vec<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum StdinFormat {
    Obj,
    Stl,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        eprintln!("Logging could not be initialized");
    }

    if let Err(err) = sample(&cli) {
        error!("{}: {}", err.stage(), err);
        process::exit(1);
    }
}

fn sample(cli: &Cli) -> Result<()> {
    let mesh = load_mesh(cli.input.as_deref(), cli.stdin_format)?;

    let mut builder = SamplerBuilder::new()
        .sample_count(cli.sample_count)
        .oversample_factor(cli.oversample);

    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }

    for path in cli.output.iter() {
        builder = builder.add_sink(sink_for_path(path)?);
    }

    let points = builder.build().run(&mesh)?;

    if cli.output.is_empty() {
        print_points(&points)?;
    }

    Ok(())
}

fn load_mesh(input: Option<&Path>, stdin_format: StdinFormat) -> Result<Mesh> {
    match input {
        Some(path) => load::load_path(path),
        None => {
            info!("Reading mesh from stdin...");
            let stdin = io::stdin();
            let mut stdin = stdin.lock();
            match stdin_format {
                StdinFormat::Stl => load::stl::load_reader(&mut stdin, "<stdin>"),
                StdinFormat::Obj => load::obj::load_reader(&mut stdin, "<stdin>"),
            }
        }
    }
}

fn sink_for_path(path: &Path) -> Result<Box<dyn PointSink>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "obj" => Ok(Box::new(ObjSink::new(path))),
        "png" => Ok(Box::new(PngSink::new(path))),
        _ => Err(Error::UnsupportedFormat { extension }),
    }
}

fn print_points(points: &[Point]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for p in points {
        writeln!(out, "{} {} {}", p.x, p.y, p.z)?;
    }
    out.flush()?;

    Ok(())
}
