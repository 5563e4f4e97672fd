use crate::constants::DIRECTIONS;

use std::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut},
};

use serde::Serialize;

pub type RoomId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TileType {
    #[default]
    Blank,
    Wall,
    Room,
    Path,
}

impl TileType {
    pub const fn to_char(self) -> char {
        match self {
            TileType::Blank => ' ',
            TileType::Wall => '#',
            TileType::Room => '.',
            TileType::Path => ':',
        }
    }

    pub fn is_blank(self) -> bool {
        matches!(self, TileType::Blank)
    }
}

impl Display for TileType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TileType::Blank => write!(f, "blank"),
            TileType::Wall => write!(f, "wall"),
            TileType::Room => write!(f, "room"),
            TileType::Path => write!(f, "path"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn all() -> impl Iterator<Item = Direction> {
        DIRECTIONS.into_iter()
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    // Stable index, used to key per-side state in fixed-size arrays.
    pub const fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    /// Moves `(x, y)` one tile in this direction. Returns `None` when the
    /// step would leave the non-negative quadrant; the upper bound is left to
    /// the caller since it depends on the grid.
    pub fn advance(self, (x, y): (usize, usize)) -> Option<(usize, usize)> {
        match self {
            Direction::Left => x.checked_sub(1).map(|x| (x, y)),
            Direction::Right => Some((x + 1, y)),
            Direction::Up => y.checked_sub(1).map(|y| (x, y)),
            Direction::Down => Some((x, y + 1)),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A placed rectangular room. The rectangle covers the room's floor and its
/// wall ring; the carver turns the outermost tiles into walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Room {
    id: RoomId,
    width: usize,
    height: usize,
    left: usize,
    top: usize,
}

impl Room {
    pub const fn new(id: RoomId, left: usize, top: usize, width: usize, height: usize) -> Self {
        Room {
            id,
            width,
            height,
            left,
            top,
        }
    }

    pub const fn id(&self) -> RoomId {
        self.id
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn left(&self) -> usize {
        self.left
    }

    pub const fn top(&self) -> usize {
        self.top
    }

    // Exclusive bounds
    pub const fn right(&self) -> usize {
        self.left + self.width
    }

    pub const fn bottom(&self) -> usize {
        self.top + self.height
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn center(&self) -> (usize, usize) {
        (self.left + self.width / 2, self.top + self.height / 2)
    }

    pub fn contains(&self, (x, y): (usize, usize)) -> bool {
        (self.left..self.right()).contains(&x) && (self.top..self.bottom()).contains(&y)
    }

    // True for tiles on the first/last row or column of the room.
    pub fn is_perimeter(&self, (x, y): (usize, usize)) -> bool {
        self.contains((x, y))
            && (x == self.left
                || x == self.right() - 1
                || y == self.top
                || y == self.bottom() - 1)
    }

    /// Iterates every tile of the room in column-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.left..self.right()).flat_map(move |x| (self.top..self.bottom()).map(move |y| (x, y)))
    }

    // Whether the room, grown by one tile on every side, overlaps `other`.
    pub fn touches(&self, other: &Room) -> bool {
        self.left < other.right() + 1
            && other.left < self.right() + 1
            && self.top < other.bottom() + 1
            && other.top < self.bottom() + 1
    }
}

impl Display for Room {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} [({}, {}) {}x{}]",
            self.id, self.left, self.top, self.width, self.height
        )
    }
}

/// A straight run of path tiles starting next to a room's wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Corridor {
    pub room: RoomId,
    pub direction: Direction,
    // First tile outside the room's wall.
    pub origin: (usize, usize),
    // Number of path tiles; the tile after the last one is a wall.
    pub length: usize,
}

impl Corridor {
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        std::iter::successors(Some(self.origin), move |cell| self.direction.advance(*cell))
            .take(self.length)
    }

    /// The wall tile the corridor runs into.
    pub fn end(&self) -> Option<(usize, usize)> {
        (0..self.length).try_fold(self.origin, |cell, _| self.direction.advance(cell))
    }
}

impl Display for Corridor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "room #{} {} from ({}, {}) x{}",
            self.room, self.direction, self.origin.0, self.origin.1, self.length
        )
    }
}

/// Row-major tile storage addressed by `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileType>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            tiles: vec![TileType::Blank; width * height],
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, (x, y): (usize, usize)) -> bool {
        x < self.width && y < self.height
    }

    fn offset(&self, (x, y): (usize, usize)) -> Option<usize> {
        self.in_bounds((x, y)).then(|| y * self.width + x)
    }

    pub fn get(&self, cell: (usize, usize)) -> Option<TileType> {
        self.offset(cell).map(|idx| self.tiles[idx])
    }

    pub fn get_mut(&mut self, cell: (usize, usize)) -> Option<&mut TileType> {
        self.offset(cell).map(|idx| &mut self.tiles[idx])
    }

    pub fn clear(&mut self) {
        self.tiles.fill(TileType::Blank);
    }

    pub fn count(&self, tile: TileType) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }

    pub fn is_blank(&self) -> bool {
        self.tiles.iter().all(|t| t.is_blank())
    }

    /// Iterates over the tiles of a single row.
    pub fn row(&self, y: usize) -> &[TileType] {
        let start = y * self.width;
        &self.tiles[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TileType]> {
        self.tiles.chunks(self.width.max(1))
    }

    fn expect_offset(&self, cell: (usize, usize)) -> usize {
        match self.offset(cell) {
            Some(idx) => idx,
            None => panic!(
                "Tile ({}, {}) is out of bounds for a {}x{} grid",
                cell.0, cell.1, self.width, self.height
            ),
        }
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = TileType;

    fn index(&self, cell: (usize, usize)) -> &Self::Output {
        &self.tiles[self.expect_offset(cell)]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, cell: (usize, usize)) -> &mut Self::Output {
        let idx = self.expect_offset(cell);
        &mut self.tiles[idx]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            let line = self.row(y).iter().map(|t| t.to_char()).collect::<String>();
            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}

/// An owned snapshot of a generated map, safe to hand to other threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DungeonMap {
    pub seed: u64,
    pub grid: Grid,
    pub rooms: Vec<Room>,
    pub corridors: Vec<Corridor>,
}

impl DungeonMap {
    pub fn room(&self, room_id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id() == room_id)
    }
}

impl Display for DungeonMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_grid_starts_blank() {
        let grid = Grid::new(7, 5);

        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 5);
        assert!(grid.is_blank());
        assert_eq!(grid.count(TileType::Blank), 35);
    }

    #[test]
    fn test_grid_index_and_clear() {
        let mut grid = Grid::new(4, 3);

        grid[(3, 2)] = TileType::Wall;
        grid[(0, 1)] = TileType::Path;

        assert_eq!(grid[(3, 2)], TileType::Wall);
        assert_eq!(grid.get((0, 1)), Some(TileType::Path));
        assert_eq!(grid.row(2), &[TileType::Blank, TileType::Blank, TileType::Blank, TileType::Wall]);
        assert_eq!(grid.count(TileType::Wall), 1);

        grid.clear();

        assert!(grid.is_blank());
    }

    #[test]
    fn test_grid_checked_access_out_of_bounds() {
        let mut grid = Grid::new(4, 3);

        assert_eq!(grid.get((4, 0)), None);
        assert_eq!(grid.get((0, 3)), None);
        assert!(grid.get_mut((10, 10)).is_none());
        assert!(!grid.in_bounds((4, 2)));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_grid_index_out_of_bounds_panics() {
        let grid = Grid::new(4, 3);

        // Must not wrap into the next row
        let _ = grid[(4, 0)];
    }

    #[test]
    fn test_grid_display() {
        let mut grid = Grid::new(3, 2);
        grid[(0, 0)] = TileType::Wall;
        grid[(1, 0)] = TileType::Room;
        grid[(2, 0)] = TileType::Path;

        assert_eq!(grid.to_string(), "#.:\n\n");
    }

    #[test]
    fn test_room_bounds() {
        let room = Room::new(3, 2, 5, 4, 6);

        assert_eq!(room.id(), 3);
        assert_eq!(room.right(), 6);
        assert_eq!(room.bottom(), 11);
        assert_eq!(room.area(), 24);
        assert_eq!(room.center(), (4, 8));
        assert_eq!(room.cells().count(), 24);

        assert!(room.contains((2, 5)));
        assert!(room.contains((5, 10)));
        assert!(!room.contains((6, 10)));
        assert!(!room.contains((1, 5)));

        assert!(room.is_perimeter((2, 7)));
        assert!(room.is_perimeter((4, 10)));
        assert!(!room.is_perimeter((3, 7)));
    }

    #[test]
    fn test_room_touches() {
        let room = Room::new(0, 1, 1, 4, 4);

        // Separated by a single blank column
        assert!(!room.touches(&Room::new(1, 6, 1, 4, 4)));
        // Diagonally adjacent
        assert!(room.touches(&Room::new(2, 5, 5, 4, 4)));
        assert!(room.touches(&Room::new(3, 2, 2, 1, 1)));
    }

    #[test]
    fn test_direction_advance() {
        assert_eq!(Direction::Left.advance((0, 3)), None);
        assert_eq!(Direction::Up.advance((3, 0)), None);
        assert_eq!(Direction::Left.advance((2, 3)), Some((1, 3)));
        assert_eq!(Direction::Right.advance((2, 3)), Some((3, 3)));
        assert_eq!(Direction::Up.advance((2, 3)), Some((2, 2)));
        assert_eq!(Direction::Down.advance((2, 3)), Some((2, 4)));

        for direction in Direction::all() {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(DIRECTIONS[direction.index()], direction);
        }
    }

    #[test]
    fn test_corridor_cells_and_end() {
        let corridor = Corridor {
            room: 1,
            direction: Direction::Left,
            origin: (9, 2),
            length: 3,
        };

        assert_eq!(corridor.cells().collect::<Vec<_>>(), vec![(9, 2), (8, 2), (7, 2)]);
        assert_eq!(corridor.end(), Some((6, 2)));
    }
}
