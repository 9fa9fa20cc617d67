//! Command-line driver for the track paint tables: list, paint one tile, or sweep them all.

mod config;

use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use simplelog::{Config, LevelFilter, WriteLogger};
use trackpaint_geom::Direction;
use trackpaint_rides::{RideType, track_paint_function};
use trackpaint_track::TrackElemType;

use config::PaintConfig;

#[derive(Parser)]
#[command(name = "trackpaint")]
#[command(about = "Paint ride track elements into draw calls, tunnels and support heights")]
#[command(version)]
struct Cli {
    /// TOML file describing the view, tile and ride
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write the log here instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ride types and the elements each paints
    List {
        /// Only this ride type
        ride: Option<RideType>,
    },

    /// Paint one tile of one element and print the session as TOML
    Paint(PaintArgs),

    /// Paint every element, direction and sequence, logging counts and timing
    Sweep {
        /// Only this ride type
        ride: Option<RideType>,
    },
}

#[derive(Args)]
struct PaintArgs {
    ride: RideType,
    element: TrackElemType,
    #[arg(long, default_value_t = 0)]
    sequence: u8,
    #[arg(long, default_value_t = 0)]
    direction: Direction,
    /// Overrides the config's track height
    #[arg(long)]
    height: Option<i32>,
    /// Overrides the config's camera rotation
    #[arg(long)]
    rotation: Option<u8>,
    #[arg(long)]
    chain: bool,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<(), Box<dyn Error>> {
    match log_file {
        Some(path) => WriteLogger::init(LevelFilter::Info, Config::default(), File::create(path)?)?,
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init(),
    }
    Ok(())
}

fn list(ride: Option<RideType>) {
    let rides = ride.map_or(RideType::ALL.to_vec(), |r| vec![r]);
    for ride in rides {
        let elements: Vec<&str> = ride.supported_elements().map(TrackElemType::name).collect();
        println!("{} ({} elements)", ride, elements.len());
        for name in elements {
            println!("  {}", name);
        }
    }
}

fn paint(cfg: &mut PaintConfig, args: &PaintArgs) -> Result<(), Box<dyn Error>> {
    if let Some(height) = args.height {
        cfg.height = height;
    }
    if let Some(rotation) = args.rotation {
        cfg.rotation = rotation & 3;
    }
    cfg.element.chain |= args.chain;
    if args.direction > 3 {
        return Err(format!("direction {} out of range 0..4", args.direction).into());
    }
    if args.sequence >= args.element.sequence_count() {
        return Err(format!(
            "{} has {} tiles, sequence {} does not exist",
            args.element,
            args.element.sequence_count(),
            args.sequence
        )
        .into());
    }
    let f = track_paint_function(args.ride, args.element)
        .ok_or_else(|| format!("{} does not paint {}", args.ride, args.element))?;

    let mut session = cfg.session();
    let element = cfg.element(args.element);
    let support_type = cfg.support_type.unwrap_or(args.ride.default_support_type());
    f(&mut session, &cfg.ride, args.sequence, args.direction, cfg.height, &element, support_type);
    log::info!(
        "{} {} seq={} dir={}: {} draw calls, {} tunnels",
        args.ride,
        args.element,
        args.sequence,
        args.direction,
        session.draw_calls().len(),
        session.tunnel_count()
    );
    print!("{}", toml::to_string(&session)?);
    Ok(())
}

fn sweep(cfg: &PaintConfig, ride: Option<RideType>) {
    let rides = ride.map_or(RideType::ALL.to_vec(), |r| vec![r]);
    let mut session = cfg.session();
    for ride in rides {
        let support_type = cfg.support_type.unwrap_or(ride.default_support_type());
        let start = Instant::now();
        let (mut tiles, mut draws, mut tunnels) = (0usize, 0usize, 0usize);
        for elem in ride.supported_elements() {
            let Some(f) = track_paint_function(ride, elem) else { continue };
            let element = cfg.element(elem);
            for sequence in 0..elem.sequence_count() {
                for direction in 0..4 {
                    session.reset();
                    f(&mut session, &cfg.ride, sequence, direction, cfg.height, &element, support_type);
                    if session.stats.general_calls != 1 {
                        log::warn!(
                            "{} {} seq={} dir={} set the clearance {} times",
                            ride,
                            elem,
                            sequence,
                            direction,
                            session.stats.general_calls
                        );
                    }
                    tiles += 1;
                    draws += session.draw_calls().len();
                    tunnels += session.tunnel_count();
                }
            }
        }
        let ms = start.elapsed().as_secs_f64() * 1000.0;
        log::info!("{}: {} tiles, {} draw calls, {} tunnels", ride, tiles, draws, tunnels);
        log::info!(target: "perf", "ms={:.3} sweep ride={} tiles={}", ms, ride, tiles);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let mut cfg = match &cli.config {
        Some(path) => PaintConfig::from_path(path)?,
        None => PaintConfig::default(),
    };

    match cli.command {
        Commands::List { ride } => list(ride),
        Commands::Paint(args) => paint(&mut cfg, &args)?,
        Commands::Sweep { ride } => sweep(&cfg, ride),
    }
    Ok(())
}
