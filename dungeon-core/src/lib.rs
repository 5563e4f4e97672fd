mod algos;
mod constants;
mod types;

use tracing::{Level, span};

pub use algos::{ConfigError, GenerationReport, GeneratorConfig, MapGenerator};
pub use constants::DIRECTIONS;
pub use types::{Corridor, Direction, DungeonMap, Grid, Room, RoomId, TileType};

/// Runs a single generation pass and returns the resulting map.
pub fn create_map(config: GeneratorConfig) -> Result<DungeonMap, ConfigError> {
    let span = span!(Level::DEBUG, "create_map");
    let _guard = span.enter();

    let mut generator = MapGenerator::new(config)?;
    generator.generate();

    Ok(generator.into_map())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_create_map() {
        let map = create_map(GeneratorConfig::default().with_seed(11)).unwrap();

        assert_eq!(map.seed, 11);
        assert_eq!(map.grid.width(), 40);
        assert_eq!(map.grid.height(), 30);
        assert!(!map.rooms.is_empty());
        assert_eq!(map.room(0), map.rooms.first());
        assert_eq!(map.to_string().lines().count(), 30);
    }

    #[test]
    fn test_create_map_rejects_invalid_config() {
        let config = GeneratorConfig {
            room_min_dimension: 12,
            room_max_dimension: 6,
            ..GeneratorConfig::default()
        };

        assert_eq!(
            create_map(config),
            Err(ConfigError::EmptyRoomRange { min: 12, max: 6 })
        );
    }
}
