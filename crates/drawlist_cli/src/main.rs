//! Draw list CLI
//!
//! List the primitive registry, pack sample scenes and dump the records.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use drawlist_core::{pack, CommandList, CoordinateSpace, PrimitiveKind, RenderSettings};
use drawlist_gpu::{DrawListRenderer, RenderOutcome, WgpuAllocator};
use drawlist_samples::{scene_by_name, ClockTime, Scene, SCENE_NAMES};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod output;

use output::Format;

#[derive(Parser)]
#[command(name = "drawlist")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pack 2D draw lists into GPU records", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the primitive types that can be added to a draw list
    Kinds,

    /// Pack a sample scene and dump its records
    Pack {
        /// Scene to build (clock, swiss, grandfather, graph, defaults)
        #[arg(short, long, default_value = "clock")]
        scene: String,

        /// Render settings file (TOML)
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Clock time as HH:MM[:SS], defaults to the current local time
        #[arg(short, long, value_parser = parse_time)]
        time: Option<ClockTime>,

        /// Number of 50 ms animation steps to run before packing
        #[arg(long, default_value = "0")]
        steps: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Output path, stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also upload the records to a headless GPU device
        #[arg(long)]
        upload: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Kinds => cmd_kinds(),
        Commands::Pack {
            scene,
            settings,
            time,
            steps,
            format,
            output,
            upload,
        } => cmd_pack(&PackArgs {
            scene,
            settings,
            time,
            steps,
            format,
            output,
            upload,
        }),
    }
}

fn cmd_kinds() -> Result<()> {
    for kind in PrimitiveKind::ALL {
        println!("{kind}");
    }
    Ok(())
}

struct PackArgs {
    scene: String,
    settings: Option<PathBuf>,
    time: Option<ClockTime>,
    steps: u32,
    format: Format,
    output: Option<PathBuf>,
    upload: bool,
}

fn cmd_pack(args: &PackArgs) -> Result<()> {
    let settings = match &args.settings {
        Some(path) => RenderSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => RenderSettings::default(),
    };

    let (list, settings) = build_scene(args, &settings)?;
    let records = pack(&list, &settings.pack_options())?;
    info!(
        "Packed scene '{}': {} primitives, {} records",
        args.scene,
        list.len(),
        records.len()
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            output::write_records(&mut BufWriter::new(file), &records, args.format)?;
            info!("Records written to: {}", path.display());
        }
        None => output::write_records(&mut io::stdout().lock(), &records, args.format)?,
    }

    if args.upload {
        upload(&list, settings)?;
    }
    Ok(())
}

/// Build the requested scene along with the settings to pack it under
///
/// `defaults` is authored in the configured space. Sample scenes are always
/// authored in normalized units and get normalized settings back.
fn build_scene(
    args: &PackArgs,
    settings: &RenderSettings,
) -> Result<(CommandList, RenderSettings)> {
    if args.scene.eq_ignore_ascii_case("defaults") {
        let extent = settings.authoring_extent();
        let mut list = CommandList::with_capacity(PrimitiveKind::ALL.len());
        for kind in PrimitiveKind::ALL {
            list.add_kind(kind, extent);
        }
        return Ok((list, settings.clone()));
    }

    let mut scene = scene_by_name(&args.scene).with_context(|| {
        format!(
            "Unknown scene '{}'. Valid scenes: {}, defaults",
            args.scene,
            SCENE_NAMES.join(", ")
        )
    })?;

    let time = args.time.unwrap_or_else(ClockTime::now_local);
    scene.update(time, Duration::ZERO);
    for _ in 0..args.steps {
        scene.update(time, STEP);
    }
    Ok((scene.command_list().clone(), normalized(settings)))
}

/// Same settings in normalized space, tolerance converted from pixels
fn normalized(settings: &RenderSettings) -> RenderSettings {
    let extent = settings.authoring_extent();
    let tolerance = if extent.is_absolute() {
        settings.tolerance / extent.shorter_side()
    } else {
        settings.tolerance
    };
    if settings.space != CoordinateSpace::Normalized {
        tracing::debug!("Sample scenes are normalized, ignoring {:?}", settings.space);
    }

    RenderSettings {
        tolerance,
        space: CoordinateSpace::Normalized,
        ..settings.clone()
    }
}

const STEP: Duration = Duration::from_millis(50);

fn upload(list: &CommandList, settings: RenderSettings) -> Result<()> {
    let allocator = pollster::block_on(WgpuAllocator::headless())?;
    let mut renderer = DrawListRenderer::new(allocator, settings);

    match renderer.render(list)? {
        RenderOutcome::Uploaded {
            records,
            reallocated,
            uniforms,
        } => info!(
            "Uploaded {} records ({} bytes, reallocated: {}), {} uniform bytes",
            records,
            renderer.record_buffer().size_bytes(),
            reallocated,
            uniforms.as_bytes().len()
        ),
        RenderOutcome::Skipped => info!("Nothing to upload"),
    }
    Ok(())
}

/// Parse `HH:MM` or `HH:MM:SS` into a clock time
fn parse_time(s: &str) -> Result<ClockTime, String> {
    let fields: Vec<&str> = s.split(':').collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(format!("expected HH:MM[:SS], got '{s}'"));
    }

    let field = |i: usize, max: u32, what: &str| -> Result<u32, String> {
        let Some(text) = fields.get(i) else {
            return Ok(0);
        };
        let value: u32 = text
            .parse()
            .map_err(|_| format!("invalid {what} '{text}'"))?;
        if value > max {
            return Err(format!("{what} {value} out of range 0..={max}"));
        }
        Ok(value)
    };

    Ok(ClockTime::new(
        field(0, 23, "hour")?,
        field(1, 59, "minute")?,
        field(2, 59, "second")?,
        0,
    ))
}
