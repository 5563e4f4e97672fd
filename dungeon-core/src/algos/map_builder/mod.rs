use super::RngHandler;
use crate::{
    constants::MAX_PLACEMENT_ATTEMPTS,
    types::{Corridor, DungeonMap, Grid, Room, RoomId},
};

use rand::{Rng, rngs::StdRng};
use serde::Serialize;
use tracing::{Level, event, span};

mod builder_config;
mod carve_paths;
mod gen_rooms;

pub use builder_config::{ConfigError, GeneratorConfig};

/// Outcome of a single generation pass.
///
/// `success` is always set: running out of space for rooms ends the pass
/// early but is not a failure. Compare `rooms_placed` with `rooms_requested`
/// to tell a sparse map from a fully packed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub success: bool,
    pub rooms_requested: usize,
    pub rooms_placed: usize,
    // Total room proposals drawn across all slots.
    pub attempts: usize,
    pub corridors: usize,
}

impl GenerationReport {
    pub fn is_fully_packed(&self) -> bool {
        self.rooms_placed == self.rooms_requested
    }
}

pub struct MapGenerator {
    config: GeneratorConfig,
    seed: u64,
    rng: StdRng,
    grid: Grid,
    rooms: Vec<Room>,
    corridors: Vec<Corridor>,
}

impl MapGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(RngHandler::clock_seed);

        Ok(MapGenerator {
            config,
            seed,
            rng: RngHandler::rng(seed),
            grid: Grid::new(config.width, config.height),
            rooms: Vec::new(),
            corridors: Vec::new(),
        })
    }

    /// Swaps in a new configuration. The current map is discarded and the
    /// random source is reseeded, so `generate` has to run again.
    pub fn reconfigure(&mut self, config: GeneratorConfig) -> Result<(), ConfigError> {
        *self = Self::new(config)?;
        Ok(())
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    /// Clones the current map so it can outlive or be shared away from the
    /// generator.
    pub fn snapshot(&self) -> DungeonMap {
        DungeonMap {
            seed: self.seed,
            grid: self.grid.clone(),
            rooms: self.rooms.clone(),
            corridors: self.corridors.clone(),
        }
    }

    pub fn into_map(self) -> DungeonMap {
        DungeonMap {
            seed: self.seed,
            grid: self.grid,
            rooms: self.rooms,
            corridors: self.corridors,
        }
    }

    /// Replaces the current map with a freshly generated one.
    ///
    /// Each placement slot gets up to `MAX_PLACEMENT_ATTEMPTS` proposals. The
    /// first slot that runs out ends the pass, leaving fewer rooms than
    /// requested.
    pub fn generate(&mut self) -> GenerationReport {
        let span = span!(Level::DEBUG, "generate", seed = self.seed);
        let _guard = span.enter();

        let build_start = std::time::Instant::now();

        self.grid.clear();
        self.rooms.clear();
        self.corridors.clear();

        let mut attempts = 0;

        for room_id in 0..self.config.max_rooms {
            let Some(room) = Self::place_room(
                &self.grid,
                &self.config,
                room_id,
                &mut self.rng,
                &mut attempts,
            ) else {
                event!(
                    Level::WARN,
                    "No space left for room #{} after {} attempts, stopping with {} rooms",
                    room_id,
                    MAX_PLACEMENT_ATTEMPTS,
                    self.rooms.len()
                );
                break;
            };

            Self::stamp_room(&mut self.grid, &room);
            let corridors = Self::carve_paths(&mut self.grid, &room);

            event!(
                Level::DEBUG,
                "Placed room {} with {} corridors",
                room,
                corridors.len()
            );

            self.rooms.push(room);
            self.corridors.extend(corridors);
        }

        let report = GenerationReport {
            success: true,
            rooms_requested: self.config.max_rooms,
            rooms_placed: self.rooms.len(),
            attempts,
            corridors: self.corridors.len(),
        };

        event!(
            Level::DEBUG,
            "Built a [{}x{}] map with {}/{} rooms and {} corridors in {}ms ({} attempts)",
            self.grid.width(),
            self.grid.height(),
            report.rooms_placed,
            report.rooms_requested,
            report.corridors,
            build_start.elapsed().as_millis(),
            report.attempts
        );

        report
    }

    fn place_room<R: Rng>(
        grid: &Grid,
        config: &GeneratorConfig,
        room_id: RoomId,
        rng: &mut R,
        attempts: &mut usize,
    ) -> Option<Room> {
        (0..MAX_PLACEMENT_ATTEMPTS).find_map(|_| {
            *attempts += 1;
            Self::propose_room(grid, config, room_id, rng)
        })
    }
}
