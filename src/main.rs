use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use quadplot::color::{DEFAULT_PALETTE, Rgba, parse_palette};
use quadplot::config::{DATA_FILE, GRAPH_FILE, STREAM_COUNT};
use quadplot::model::QuadrantPlot;
use quadplot::parser::FsSource;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plot four tab-separated data streams as quadrant line charts", long_about = None)]
struct Cli {
    /// Tab-separated data file; the first line holds the stream labels
    #[arg(value_name = "DATA_FILE", default_value = DATA_FILE)]
    data_file: Utf8PathBuf,

    /// Background image with the chart axes
    #[arg(short, long, value_name = "IMAGE", default_value = GRAPH_FILE)]
    background: Utf8PathBuf,

    /// Quadrant line colors, e.g. "green,red,blue,yellow" or "#00ff00,..."
    #[arg(long, value_parser = parse_palette)]
    colors: Option<[Rgba; STREAM_COUNT]>,

    /// Print the mapped coordinates as JSON instead of opening a window
    #[arg(long)]
    print_json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quadplot=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    // Failures are reported, not turned into an exit status.
    if let Err(err) = run(&cli) {
        tracing::error!("{:#}", err);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let palette = cli.colors.unwrap_or(DEFAULT_PALETTE);
    if cli.print_json {
        print_json(cli)
    } else {
        show_window(cli, palette)
    }
}

fn print_json(cli: &Cli) -> Result<()> {
    let plot = compute(cli)?;
    println!("{}", serde_json::to_string_pretty(&plot)?);
    Ok(())
}

fn compute(cli: &Cli) -> Result<QuadrantPlot> {
    tracing::info!("Reading {}", cli.data_file);
    let plot = quadplot::compute_plot(&mut FsSource, &cli.data_file)
        .with_context(|| format!("Failed to plot {}", cli.data_file))?;
    for (q, points) in plot.polylines.iter().enumerate() {
        tracing::info!(
            "Quadrant {}: {} points, max {}",
            q,
            points.len(),
            plot.max_values[q]
        );
    }
    Ok(plot)
}

#[cfg(feature = "egui")]
fn show_window(cli: &Cli, palette: [Rgba; STREAM_COUNT]) -> Result<()> {
    let background = quadplot::egui_app::load_background_image(&cli.background)
        .context("Failed to load media")?;
    let plot = compute(cli)?;
    quadplot::egui_app::run_window(plot, palette, Some(background))?;
    tracing::info!("Window closed");
    Ok(())
}

#[cfg(not(feature = "egui"))]
fn show_window(cli: &Cli, _palette: [Rgba; STREAM_COUNT]) -> Result<()> {
    tracing::warn!("Built without the egui feature, printing JSON instead");
    print_json(cli)
}
