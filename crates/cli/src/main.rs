//! DemGlyph CLI - DEM to 3D anaglyph conversion

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use demglyph_algorithms::anaglyph::compose;
use demglyph_algorithms::colorize::colorize;
use demglyph_algorithms::palette::ElevationPalette;
use demglyph_algorithms::stereo::{split, StereoParams};
use demglyph_core::io::{read_dem, write_image};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "demglyph")]
#[command(
    author,
    version,
    about = "Turn DEM (Digital Elevation Model) files into 3D anaglyph images",
    long_about = None
)]
struct Cli {
    /// DEM file to process
    dem_file: PathBuf,

    /// Output file name
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// Observer altitude, in the same unit as the elevation values
    #[arg(short = 'a', long, default_value_t = 4000.0)]
    observer_alt: f64,

    /// Map plane altitude (the zero-parallax reference plane)
    #[arg(short = 'p', long, default_value_t = 0.0)]
    map_plane_alt: f64,

    /// Pixel spacing between the left and right eyes
    #[arg(short = 's', long, default_value_t = 750.0)]
    eye_spacing: f64,

    /// Ratio of parallax assigned to the left eye, in [0, 1]
    #[arg(short = 'n', long, default_value_t = 0.5)]
    nadir: f64,

    /// Also save col_im.png, left_im.png and right_im.png
    /// (pass `--keep-all false` to disable)
    #[arg(
        short = 'k',
        long,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    keep_all: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn row_bar(rows: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(rows);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.green}] {pos}/{len} rows")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb
}

fn done(name: &str, path: &Path, elapsed: std::time::Duration) {
    println!("{} saved to: {}", name, path.display());
    println!("  Processing time: {:.2?}", elapsed);
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let params = StereoParams {
        observer_alt: cli.observer_alt,
        map_plane_alt: cli.map_plane_alt,
        eye_spacing: cli.eye_spacing,
        nadir: cli.nadir,
    };
    params.validate().context("Invalid stereo parameters")?;

    let pb = spinner("Reading DEM...");
    let dem = read_dem(&cli.dem_file)
        .with_context(|| format!("Failed to read {}", cli.dem_file.display()))?;
    pb.finish_and_clear();
    info!("Input: {} x {} ({} cells)", dem.cols(), dem.rows(), dem.len());

    let start = Instant::now();
    let palette = ElevationPalette::default();

    let pb = row_bar(dem.rows() as u64, "Colorizing");
    let (colorized, range) =
        colorize(&dem, &palette, |_| pb.inc(1)).context("Failed to colorize DEM")?;
    pb.finish_and_clear();
    info!("Elevation range: {:.1} to {:.1}", range.min, range.max);

    let pb = row_bar(dem.rows() as u64, "Splitting into eye views");
    let (left, right) =
        split(&colorized, &dem, &params, |_| pb.inc(1)).context("Failed to split eye views")?;
    pb.finish_and_clear();

    let composite = compose(&left, &right).context("Failed to compose anaglyph")?;
    let elapsed = start.elapsed();

    let pb = spinner("Writing output...");
    write_image(&composite, &cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    if cli.keep_all {
        write_image(&colorized, "col_im.png").context("Failed to write col_im.png")?;
        write_image(&left, "left_im.png").context("Failed to write left_im.png")?;
        write_image(&right, "right_im.png").context("Failed to write right_im.png")?;
    }
    pb.finish_and_clear();

    done("Anaglyph", &cli.output, elapsed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn keep_all_defaults_to_true() {
        let cli = Cli::parse_from(["demglyph", "dem.png"]);
        assert!(cli.keep_all);
        assert_eq!(cli.output, PathBuf::from("output.png"));
        assert_eq!(cli.observer_alt, 4000.0);
        assert_eq!(cli.eye_spacing, 750.0);
        assert_eq!(cli.nadir, 0.5);
    }

    #[test]
    fn keep_all_can_be_disabled() {
        let cli = Cli::parse_from(["demglyph", "dem.png", "--keep-all", "false"]);
        assert!(!cli.keep_all);
    }

    #[test]
    fn bare_keep_all_flag_enables() {
        let cli = Cli::parse_from(["demglyph", "dem.png", "-k"]);
        assert!(cli.keep_all);
    }
}
