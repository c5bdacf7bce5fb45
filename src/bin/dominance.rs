use anyhow::{Context, Result};
use clap::Parser;
use dominance::{Palette, PaletteEntry};
use std::path::{Path, PathBuf};

/// Extract a dominant color palette from images.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Merge colors whose RGB distance is within this threshold (0 disables
    /// grouping)
    #[arg(short, long, default_value_t = 0.0)]
    threshold: f64,

    /// Maximum number of palette entries to show per image
    #[arg(short, long, default_value_t = 1000)]
    limit: usize,

    /// Emit one JSON report per image instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct Report<'a> {
    filename: String,
    total_pixels: u64,
    unique_color_groups: usize,
    colors: &'a [PaletteEntry],
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    for input in &args.inputs {
        let image = image::io::Reader::open(input)
            .with_context(|| format!("failed to open {}", input.display()))?
            .decode()
            .with_context(|| format!("failed to decode {}", input.display()))?
            .to_rgba8();

        let palette = Palette::from_image(image)
            .threshold(args.threshold)
            .generate()
            .with_context(|| format!("failed to analyze {}", input.display()))?;

        let shown = &palette.entries()[..args.limit.min(palette.entries().len())];

        if args.json {
            let report = Report {
                filename: filename_of(input),
                total_pixels: palette.total_pixels(),
                unique_color_groups: palette.entries().len(),
                colors: shown,
            };

            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_table(input, &palette, shown);
        }
    }

    Ok(())
}

fn print_table(input: &Path, palette: &Palette, shown: &[PaletteEntry]) {
    println!(
        "{}: {} pixels, {} color groups",
        input.display(),
        palette.total_pixels(),
        palette.entries().len()
    );
    println!(
        "{:<9} {:<20} {:>10} {:>8} {:>7}",
        "HEX", "RGB", "COUNT", "SHARE", "MERGED"
    );

    for entry in shown {
        println!(
            "{:<9} {:<20} {:>10} {:>8} {:>7}",
            entry.hex, entry.rgb, entry.count, entry.percentage, entry.merged_colors
        );
    }

    let hidden = palette.entries().len() - shown.len();
    if hidden > 0 {
        println!("... and {hidden} more color groups (raise --limit to see them)");
    }

    println!();
}

fn filename_of(input: &Path) -> String {
    input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}
