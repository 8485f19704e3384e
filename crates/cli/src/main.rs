use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod guardlines;
mod zones;

use zones::ConvertCfg;

#[derive(Parser)]
#[command(name = "zonemerge")]
#[command(about = "Merge adjacent guardline rectangles into world-map zone polygons")]
#[command(version = zonemerge::VERSION)]
struct Cmd {
    /// Log per-section details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convert a guardlines file into a zones JSON document
    Convert {
        /// Map index the zones belong to
        #[arg(short = 'm', long = "mapindex", default_value_t = 0)]
        map_index: i64,
        /// Color the zones are drawn with
        #[arg(short, long, default_value = "yellow")]
        color: String,
        /// Warn on stderr about intersecting rectangles within sections
        #[arg(short, long)]
        warn_intersections: bool,
        /// Input file (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print overlapping rectangle pairs per section as JSON
    Intersections {
        /// Input file (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    match cmd.action {
        Action::Convert {
            map_index,
            color,
            warn_intersections,
            input,
            output,
        } => {
            let cfg = ConvertCfg {
                map_index,
                color,
                warn_intersections,
            };
            convert(input.as_deref(), output.as_deref(), &cfg)
        }
        Action::Intersections { input } => intersections(input.as_deref()),
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    let mut text = String::new();
    match input {
        Some(path) => {
            File::open(path)
                .with_context(|| format!("opening {}", path.display()))?
                .read_to_string(&mut text)
                .with_context(|| format!("reading {}", path.display()))?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
        }
    }
    Ok(text)
}

fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

fn convert(input: Option<&Path>, output: Option<&Path>, cfg: &ConvertCfg) -> Result<()> {
    let text = read_input(input)?;
    let sections = guardlines::Parser::new()?.parse(&text)?;
    let rects: usize = sections.iter().map(|s| s.rects.len()).sum();
    let doc = zones::build_zones(&sections, cfg)?;
    tracing::info!(
        sections = sections.len(),
        rects,
        zones = doc.zones.len(),
        map_index = cfg.map_index,
        "convert"
    );
    let mut out = open_output(output)?;
    zones::write_json(&mut out, &doc)?;
    out.flush().context("flushing output")?;
    Ok(())
}

fn intersections(input: Option<&Path>) -> Result<()> {
    let text = read_input(input)?;
    let sections = guardlines::Parser::new()?.parse(&text)?;
    let report = zones::intersection_report(&sections);
    let mut out = open_output(None)?;
    zones::write_json(&mut out, &report)?;
    out.flush().context("flushing output")?;
    Ok(())
}
