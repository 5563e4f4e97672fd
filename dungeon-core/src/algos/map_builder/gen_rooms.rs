use super::{GeneratorConfig, MapGenerator};
use crate::{
    constants::MAP_EDGE_MARGIN,
    types::{Grid, Room, RoomId, TileType},
};

use rand::Rng;

impl MapGenerator {
    /// Draws a random room and keeps it only if it lands on blank space with
    /// a blank ring around it. The grid is never written to.
    pub(super) fn propose_room<R: Rng>(
        grid: &Grid,
        config: &GeneratorConfig,
        room_id: RoomId,
        rng: &mut R,
    ) -> Option<Room> {
        let width = rng.random_range(config.room_min_dimension..config.room_max_dimension);
        let height = rng.random_range(config.room_min_dimension..config.room_max_dimension);

        // Together with the one tile ring checked below, this keeps every
        // read inside the grid. Both must change together.
        let left =
            rng.random_range(MAP_EDGE_MARGIN..=grid.width() - width - 2 * MAP_EDGE_MARGIN);
        let top =
            rng.random_range(MAP_EDGE_MARGIN..=grid.height() - height - 2 * MAP_EDGE_MARGIN);

        let room = Room::new(room_id, left, top, width, height);

        Self::is_clear_around(grid, &room).then_some(room)
    }

    // Checking every tile of the room grown by one on each side covers the
    // eight neighbours of every room tile.
    fn is_clear_around(grid: &Grid, room: &Room) -> bool {
        let rows = room.top() - MAP_EDGE_MARGIN..room.bottom() + MAP_EDGE_MARGIN;

        (room.left() - MAP_EDGE_MARGIN..room.right() + MAP_EDGE_MARGIN)
            .all(|x| rows.clone().all(|y| grid[(x, y)].is_blank()))
    }

    pub(super) fn stamp_room(grid: &mut Grid, room: &Room) {
        for cell in room.cells() {
            grid[cell] = TileType::Room;
        }
    }
}
