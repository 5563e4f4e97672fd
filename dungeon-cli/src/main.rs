use dungeon_core::{GeneratorConfig, MapGenerator};

use anyhow::Context;
use clap::Parser;
use tracing::{Level, event};

#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Args {
    /// Number of columns in the map
    #[arg(short = 'W', long, default_value_t = 40)]
    width: usize,

    /// Number of rows in the map
    #[arg(short = 'H', long, default_value_t = 30)]
    height: usize,

    /// Number of rooms to try to place
    #[arg(short, long, default_value_t = 8)]
    max_rooms: usize,

    /// Smallest room side, inclusive
    #[arg(long, default_value_t = 6)]
    room_min: usize,

    /// Largest room side, exclusive
    #[arg(long, default_value_t = 12)]
    room_max: usize,

    /// Seed for the random source, taken from the clock when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            width: self.width,
            height: self.height,
            max_rooms: self.max_rooms,
            room_min_dimension: self.room_min,
            room_max_dimension: self.room_max,
            seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let mut generator =
        MapGenerator::new(args.generator_config()).context("Invalid map configuration")?;

    let report = generator.generate();

    event!(
        Level::INFO,
        "Generated map with seed {}: {}/{} rooms, {} corridors",
        generator.seed(),
        report.rooms_placed,
        report.rooms_requested,
        report.corridors
    );

    print!("{}", generator.grid());

    Ok(())
}
