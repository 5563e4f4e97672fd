use crate::constants::{
    DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_MAX_ROOMS, DEFAULT_ROOM_MAX_DIMENSION,
    DEFAULT_ROOM_MIN_DIMENSION, MAP_EDGE_MARGIN,
};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("map dimensions must be greater than zero, got [{width}x{height}]")]
    ZeroMapDimension { width: usize, height: usize },
    #[error("room minimum dimension must be greater than zero")]
    ZeroRoomDimension,
    #[error("room dimension range [{min}, {max}) is empty")]
    EmptyRoomRange { min: usize, max: usize },
    #[error("rooms up to {room_max} tiles do not fit in a map {map} tiles {axis}")]
    RoomTooLarge {
        axis: &'static str,
        map: usize,
        room_max: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    // Number of placement slots. Fewer rooms may end up placed.
    pub max_rooms: usize,
    // Room sides are sampled from [room_min_dimension, room_max_dimension).
    pub room_min_dimension: usize,
    pub room_max_dimension: usize,
    // When unset, a seed is taken from the clock when the generator is built.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
            max_rooms: DEFAULT_MAX_ROOMS,
            room_min_dimension: DEFAULT_ROOM_MIN_DIMENSION,
            room_max_dimension: DEFAULT_ROOM_MAX_DIMENSION,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that every room the sampler can draw fits inside the map with
    /// its margins, so placement never has to read outside the grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroMapDimension {
                width: self.width,
                height: self.height,
            });
        }

        if self.room_min_dimension == 0 {
            return Err(ConfigError::ZeroRoomDimension);
        }

        if self.room_min_dimension >= self.room_max_dimension {
            return Err(ConfigError::EmptyRoomRange {
                min: self.room_min_dimension,
                max: self.room_max_dimension,
            });
        }

        for (axis, map) in [("wide", self.width), ("tall", self.height)] {
            if map < self.room_max_dimension + 2 + MAP_EDGE_MARGIN {
                return Err(ConfigError::RoomTooLarge {
                    axis,
                    map,
                    room_max: self.room_max_dimension,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();

        assert_eq!(config.width, 40);
        assert_eq!(config.height, 30);
        assert_eq!(config.max_rooms, 8);
        assert_eq!(config.room_min_dimension, 6);
        assert_eq!(config.room_max_dimension, 12);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        let config = GeneratorConfig {
            width: 0,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroMapDimension {
                width: 0,
                height: 30
            })
        );

        let config = GeneratorConfig {
            room_min_dimension: 0,
            ..GeneratorConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroRoomDimension));
    }

    #[test]
    fn test_validate_rejects_empty_room_range() {
        let config = GeneratorConfig {
            room_min_dimension: 8,
            room_max_dimension: 8,
            ..GeneratorConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyRoomRange { min: 8, max: 8 })
        );
    }

    #[test]
    fn test_validate_rejects_rooms_too_large() {
        let config = GeneratorConfig {
            width: 14,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RoomTooLarge { axis: "wide", .. })
        ));

        let config = GeneratorConfig {
            height: 14,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RoomTooLarge { axis: "tall", .. })
        ));

        // Smallest map that still leaves a one tile margin
        let config = GeneratorConfig {
            width: 15,
            height: 15,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
