use crate::types::Direction;

pub(crate) const DEFAULT_MAP_WIDTH: usize = 40;
pub(crate) const DEFAULT_MAP_HEIGHT: usize = 30;

pub(crate) const DEFAULT_MAX_ROOMS: usize = 8;

pub(crate) const DEFAULT_ROOM_MIN_DIMENSION: usize = 6;
pub(crate) const DEFAULT_ROOM_MAX_DIMENSION: usize = 12;

// Sampler attempts per placement slot before the pass stops early.
pub(crate) const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

// Margin kept between a room's bounding box and the map border. The sampler's
// neighbourhood check reads one tile past the room on every side, so this must
// never drop below 1.
pub(crate) const MAP_EDGE_MARGIN: usize = 1;

pub const DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];
