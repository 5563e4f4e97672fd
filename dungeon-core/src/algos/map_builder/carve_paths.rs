use super::MapGenerator;
use crate::types::{Corridor, Direction, Grid, Room, TileType};

use tracing::{Level, event};

impl MapGenerator {
    /// Turns the outer ring of `room` into walls and, for each side, runs a
    /// straight corridor out to the nearest wall already on the grid.
    ///
    /// Every tile of a side gets a chance to start the corridor until one
    /// finds a wall, so a side carves at most one corridor. Sides that never
    /// meet a wall stay closed.
    pub(super) fn carve_paths(grid: &mut Grid, room: &Room) -> Vec<Corridor> {
        let mut connected = [false; 4];
        let mut corridors = Vec::new();

        for i in 0..room.width() {
            for j in 0..room.height() {
                let cell = (room.left() + i, room.top() + j);

                // West/east win over north/south, so corners only ever search
                // along their row. Generated layouts depend on this order.
                let side = if i == 0 {
                    Direction::Left
                } else if i == room.width() - 1 {
                    Direction::Right
                } else if j == 0 {
                    Direction::Up
                } else if j == room.height() - 1 {
                    Direction::Down
                } else {
                    grid[cell] = TileType::Room;
                    continue;
                };

                grid[cell] = TileType::Wall;

                if connected[side.index()] {
                    continue;
                }

                if let Some(corridor) = Self::carve_corridor(grid, room, cell, side) {
                    connected[side.index()] = true;
                    corridors.push(corridor);
                }
            }
        }

        corridors
    }

    fn carve_corridor(
        grid: &mut Grid,
        room: &Room,
        wall: (usize, usize),
        direction: Direction,
    ) -> Option<Corridor> {
        let origin = direction.advance(wall)?;
        let length = Self::distance_to_wall(grid, origin, direction)?;

        let corridor = Corridor {
            room: room.id(),
            direction,
            origin,
            length,
        };

        for cell in corridor.cells() {
            grid[cell] = TileType::Path;
        }

        event!(Level::TRACE, "Carved corridor {}", corridor);

        Some(corridor)
    }

    // Number of tiles between `origin` and the first wall found walking in
    // `direction`, or None if the walk leaves the scan area first.
    fn distance_to_wall(grid: &Grid, origin: (usize, usize), direction: Direction) -> Option<usize> {
        let mut cell = origin;
        let mut steps = 0;

        while Self::within_scan_area(grid, cell, direction) {
            if grid[cell] == TileType::Wall {
                return Some(steps);
            }

            cell = direction.advance(cell)?;
            steps += 1;
        }

        None
    }

    // Leftward and upward scans never look at the first column or row,
    // rightward and downward ones run up to the last.
    fn within_scan_area(grid: &Grid, (x, y): (usize, usize), direction: Direction) -> bool {
        match direction {
            Direction::Left => x > 0,
            Direction::Up => y > 0,
            Direction::Right => x < grid.width(),
            Direction::Down => y < grid.height(),
        }
    }
}
