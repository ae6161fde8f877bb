//! Command line driver for browsing the orthogonal slices of a nifti volume.
//!
//! Loads a volume (or a series of 2D slices), replays a list of viewer
//! events against it, prints what each of the three views would show and
//! can export the displayed slices as nifti files.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use orthonii::io::{export_frame, load_series, load_volume};
use orthonii::palette::{CrosshairColor, Palette};
use orthonii::{Event, LoadError, Plane, Session};

// use clap to create commandline interface
#[derive(Parser, Debug)]
#[command(author, about, version, long_about)]
struct Args {
    /// the input nifti file, or a glob pattern matching a series of 2D slice files
    #[arg(short, long)]
    input: String,

    /// Which volume to view when the input is 4D.
    #[arg(short, long, default_value_t = 0)]
    timepoint: usize,

    /// Starting transverse index. Out of range values wrap around.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    transverse: isize,

    /// Starting sagittal index. Out of range values wrap around.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    sagittal: isize,

    /// Starting coronal index. Out of range values wrap around.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    coronal: isize,

    /// Palette used to color the slices.
    #[arg(short, long, default_value_t = Palette::default())]
    palette: Palette,

    /// Color of the crosshair lines.
    #[arg(short, long, default_value_t = CrosshairColor::default())]
    crosshair_color: CrosshairColor,

    /// Hide the crosshairs.
    #[arg(long)]
    hide_crosshair: bool,

    /// Show the plot axes.
    #[arg(long)]
    show_axes: bool,

    /// Events to apply in order, e.g. "index sagittal 12", "scroll coronal -1",
    /// "tap transverse 4 17", "clamp transverse 0 50", "palette viridis",
    /// "color red", "crosshair off", "axes on".
    #[arg(short, long = "event")]
    events: Vec<Event>,

    /// A directory to export the displayed slices to.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn basename(input: &str) -> String {
    let stem = Path::new(input)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = stem.trim_end_matches(".gz").trim_end_matches(".nii");
    let stem: String = stem.chars().filter(|c| !"*?[]".contains(*c)).collect();
    if stem.is_empty() {
        "series".to_string()
    } else {
        stem
    }
}

fn print_frame(session: &Session) {
    for plane in Plane::ALL {
        let view = session.view(plane);
        let range = view.range();
        let (low, high) = view.clamp();
        println!(
            "{} (index {} of {})",
            plane.title(),
            session.index(plane),
            session.volume().axis_size(plane)
        );
        println!("  Shape: {:?}", view.dim());
        if range.enabled {
            println!("  Values: {} to {}", range.min, range.max);
        } else {
            println!("  Values: {} to {} (range disabled)", range.min, range.max);
        }
        println!("  Displayed: {} to {}", low, high);
        let crosshair = view.crosshair();
        match (crosshair.row(), crosshair.column()) {
            (Some(row), Some(column)) => println!("  Crosshair: row {} column {}", row, column),
            _ => println!("  Crosshair: none"),
        }
    }
    println!("Palette: {}", session.palette());
    println!(
        "Crosshair: {} ({})",
        session.crosshair_color().css(),
        if session.crosshair_visible() { "shown" } else { "hidden" }
    );
    println!(
        "Axes: {}",
        if session.axes_visible() { "shown" } else { "hidden" }
    );
}

fn run(cli: Args) -> Result<(), LoadError> {
    let input_path = Path::new(&cli.input);
    let loaded = if input_path.is_file() {
        load_volume(input_path, cli.timepoint)?
    } else {
        load_series(&cli.input)?
    };
    println!("Dims: {:?}", loaded.volume.shape());

    let mut session = Session::new(loaded.volume);
    let setup = [
        Event::SelectPalette(cli.palette),
        Event::SelectCrosshairColor(cli.crosshair_color),
        Event::SetCrosshairVisible(!cli.hide_crosshair),
        Event::SetAxesVisible(cli.show_axes),
        Event::SetIndex {
            plane: Plane::Transverse,
            index: cli.transverse,
        },
        Event::SetIndex {
            plane: Plane::Sagittal,
            index: cli.sagittal,
        },
        Event::SetIndex {
            plane: Plane::Coronal,
            index: cli.coronal,
        },
    ];
    for event in setup.into_iter().chain(cli.events) {
        session.dispatch(event);
    }
    print_frame(&session);

    if let Some(output) = cli.output {
        let written = export_frame(&session, &loaded.header, &output, &basename(&cli.input))?;
        println!("Exported {} slices to {}", written.len(), output.display());
    }
    Ok(())
}

/// Main function that parses commandline arguments and runs the program.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Args::parse();
    run(cli).unwrap_or_else(|e| {
        eprintln!("Error! {}", e);
        std::process::exit(-2);
    });
}
