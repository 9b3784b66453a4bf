//! Rectangular grids addressed by `(x, y)` points
//!
//! `x` grows to the right and `y` grows downwards, matching the way puzzle
//! inputs are laid out line by line. Lookups outside `[0, width) × [0, height)`
//! fail with [`GridError::OutOfBounds`] instead of wrapping or clamping.

use std::fmt;
use std::str::FromStr;

use advent_solver::{ParseError, SolveError};
use thiserror::Error;

/// Errors from building or indexing a [`Grid`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows, or rows without any cells
    #[error("grid has no cells")]
    Empty,
    /// A row whose length differs from the first row
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A lookup outside the grid
    #[error("point {0} is outside the grid")]
    OutOfBounds(Point),
    /// A character that cannot be turned into a cell value
    #[error("invalid cell {ch:?} at {point}")]
    InvalidCell { point: Point, ch: char },
    /// Text that is not an `x,y` pair
    #[error("invalid point {0:?}")]
    InvalidPoint(String),
}

impl From<GridError> for ParseError {
    fn from(e: GridError) -> Self {
        ParseError::InvalidFormat(e.to_string())
    }
}

impl From<GridError> for SolveError {
    fn from(e: GridError) -> Self {
        SolveError::SolveFailed(Box::new(e))
    }
}

/// Screen direction; `Up` decreases `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse the `U`/`D`/`L`/`R` letters used by movement instructions
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Which neighbours [`Grid::neighbors`] reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacency {
    /// Up, down, left and right
    Orthogonal,
    /// Orthogonal plus the four diagonals
    All,
}

const ORTHOGONAL_OFFSETS: [(i64, i64); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
const ALL_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Adjacency {
    fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            Adjacency::Orthogonal => &ORTHOGONAL_OFFSETS,
            Adjacency::All => &ALL_OFFSETS,
        }
    }
}

/// An `(x, y)` coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    pub fn manhattan(self, other: Point) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Same cell or one of the eight around it
    pub fn is_touching(self, other: Point) -> bool {
        (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }

    /// Every point from `self` to `end` inclusive
    ///
    /// Returns `None` unless the segment is horizontal, vertical or a 45°
    /// diagonal.
    pub fn line_to(self, end: Point) -> Option<Vec<Point>> {
        let dx = end.x - self.x;
        let dy = end.y - self.y;
        if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
            return None;
        }
        let steps = dx.abs().max(dy.abs());
        let (sx, sy) = (dx.signum(), dy.signum());
        Some((0..=steps).map(|i| self.offset(sx * i, sy * i)).collect())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = GridError;

    /// Parses `x,y` with optional whitespace around either number
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidPoint(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Point::new(x, y))
    }
}

/// A rectangular field of cells stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from equal-length rows
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row_idx, row) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(row);
            let found = cells.len() - before;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::RaggedRow {
                        row: row_idx,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Self {
                width,
                height,
                cells,
            }),
            _ => Err(GridError::Empty),
        }
    }

    /// Build a `width × height` grid by evaluating `f` at every point
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(Point) -> T) -> Self {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Point::new(x as i64, y as i64)))
            .map(&mut f)
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.index_of(point).is_some()
    }

    fn index_of(&self, point: Point) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn point_at(&self, index: usize) -> Point {
        Point::new((index % self.width) as i64, (index / self.width) as i64)
    }

    pub fn get(&self, point: Point) -> Result<&T, GridError> {
        self.index_of(point)
            .map(|i| &self.cells[i])
            .ok_or(GridError::OutOfBounds(point))
    }

    pub fn get_mut(&mut self, point: Point) -> Result<&mut T, GridError> {
        match self.index_of(point) {
            Some(i) => Ok(&mut self.cells[i]),
            None => Err(GridError::OutOfBounds(point)),
        }
    }

    /// Replace the cell at `point`, returning the previous value
    pub fn set(&mut self, point: Point, value: T) -> Result<T, GridError> {
        self.get_mut(point)
            .map(|cell| std::mem::replace(cell, value))
    }

    /// In-bounds neighbours of `point`
    pub fn neighbors(&self, point: Point, adjacency: Adjacency) -> impl Iterator<Item = Point> + '_ {
        adjacency
            .offsets()
            .iter()
            .map(move |&(dx, dy)| point.offset(dx, dy))
            .filter(|p| self.contains(*p))
    }

    /// All points in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.cells.len()).map(|i| self.point_at(i))
    }

    /// Points paired with their cells, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (self.point_at(i), cell))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.cells.iter_mut()
    }

    pub fn row(&self, y: usize) -> Option<&[T]> {
        (y < self.height).then(|| &self.cells[y * self.width..(y + 1) * self.width])
    }

    pub fn column(&self, x: usize) -> Option<impl Iterator<Item = &T> + '_> {
        (x < self.width).then(|| self.cells.iter().skip(x).step_by(self.width))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T: PartialEq> Grid<T> {
    /// First point (row-major) holding `value`
    pub fn find(&self, value: &T) -> Option<Point> {
        self.cells
            .iter()
            .position(|cell| cell == value)
            .map(|i| self.point_at(i))
    }

    /// Every point holding `value`, row-major
    pub fn find_all<'a>(&'a self, value: &'a T) -> impl Iterator<Item = Point> + 'a {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| *cell == value)
            .map(|(i, _)| self.point_at(i))
    }
}

impl Grid<u8> {
    /// Parse lines of ASCII characters, one byte per cell
    pub fn parse_chars(input: &str) -> Result<Self, GridError> {
        Self::from_rows(
            input
                .lines()
                .map(str::trim_end)
                .filter(|l| !l.is_empty())
                .map(|l| l.bytes().collect::<Vec<_>>()),
        )
    }

    /// Parse lines of decimal digits into their values `0..=9`
    pub fn parse_digits(input: &str) -> Result<Self, GridError> {
        let rows = input
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .enumerate()
            .map(|(y, line)| {
                line.chars()
                    .enumerate()
                    .map(|(x, ch)| {
                        ch.to_digit(10).map(|d| d as u8).ok_or(GridError::InvalidCell {
                            point: Point::new(x as i64, y as i64),
                            ch,
                        })
                    })
                    .collect::<Result<Vec<u8>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Grid<u8> {
        Grid::parse_digits("123\n456\n789\n").unwrap()
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let result = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5]]);
        assert_eq!(
            result,
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert_eq!(Grid::<u8>::from_rows(Vec::<Vec<u8>>::new()), Err(GridError::Empty));
        assert_eq!(Grid::<u8>::from_rows(vec![vec![]]), Err(GridError::Empty));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = sample();
        assert_eq!(grid.get(Point::new(2, 2)), Ok(&9));
        assert_eq!(
            grid.get(Point::new(3, 0)),
            Err(GridError::OutOfBounds(Point::new(3, 0)))
        );
        assert_eq!(
            grid.get(Point::new(0, -1)),
            Err(GridError::OutOfBounds(Point::new(0, -1)))
        );
    }

    #[test]
    fn test_set_returns_previous() {
        let mut grid = sample();
        assert_eq!(grid.set(Point::new(1, 1), 0), Ok(5));
        assert_eq!(grid.get(Point::new(1, 1)), Ok(&0));
        assert!(grid.set(Point::new(9, 9), 1).is_err());
    }

    #[test]
    fn test_parse_digits_rejects_letters() {
        assert_eq!(
            Grid::parse_digits("12\n3x\n"),
            Err(GridError::InvalidCell {
                point: Point::new(1, 1),
                ch: 'x'
            })
        );
    }

    #[test]
    fn test_find_and_find_all() {
        let grid = Grid::parse_chars("S.a\naaE\n").unwrap();
        assert_eq!(grid.find(&b'S'), Some(Point::new(0, 0)));
        assert_eq!(grid.find(&b'E'), Some(Point::new(2, 1)));
        assert_eq!(grid.find(&b'z'), None);
        assert_eq!(
            grid.find_all(&b'a').collect::<Vec<_>>(),
            vec![Point::new(2, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn test_row_and_column() {
        let grid = sample();
        assert_eq!(grid.row(1), Some(&[4, 5, 6][..]));
        assert_eq!(grid.row(3), None);
        assert_eq!(
            grid.column(2).map(|c| c.copied().collect::<Vec<_>>()),
            Some(vec![3, 6, 9])
        );
        assert!(grid.column(3).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "123\n456\n789");
    }

    #[test]
    fn test_point_line_to() {
        let line = Point::new(1, 1).line_to(Point::new(3, 3)).unwrap();
        assert_eq!(
            line,
            vec![Point::new(1, 1), Point::new(2, 2), Point::new(3, 3)]
        );
        assert_eq!(Point::new(9, 7).line_to(Point::new(7, 7)).unwrap().len(), 3);
        assert!(Point::new(0, 0).line_to(Point::new(1, 2)).is_none());
    }

    #[test]
    fn test_point_parse() {
        assert_eq!("0,9".parse::<Point>(), Ok(Point::new(0, 9)));
        assert_eq!(" 498, 4".parse::<Point>(), Ok(Point::new(498, 4)));
        assert!("0;9".parse::<Point>().is_err());
    }

    fn dims() -> impl Strategy<Value = (usize, usize)> {
        (1usize..12, 1usize..12)
    }

    proptest! {
        #[test]
        fn prop_neighbors_stay_in_bounds((w, h) in dims(), diagonal in any::<bool>()) {
            let grid = Grid::from_fn(w, h, |_| 0u8);
            let adjacency = if diagonal { Adjacency::All } else { Adjacency::Orthogonal };
            for p in grid.points() {
                for n in grid.neighbors(p, adjacency) {
                    prop_assert!(n.x >= 0 && (n.x as usize) < w);
                    prop_assert!(n.y >= 0 && (n.y as usize) < h);
                }
            }
        }

        #[test]
        fn prop_neighbor_counts(w in 2usize..12, h in 2usize..12) {
            let grid = Grid::from_fn(w, h, |_| ());
            for p in grid.points() {
                let on_x_edge = p.x == 0 || p.x as usize == w - 1;
                let on_y_edge = p.y == 0 || p.y as usize == h - 1;
                let (ortho, all) = match (on_x_edge, on_y_edge) {
                    (true, true) => (2, 3),
                    (true, false) | (false, true) => (3, 5),
                    (false, false) => (4, 8),
                };
                prop_assert_eq!(grid.neighbors(p, Adjacency::Orthogonal).count(), ortho);
                prop_assert_eq!(grid.neighbors(p, Adjacency::All).count(), all);
            }
        }

        #[test]
        fn prop_rows_read_back(rows in (1usize..10).prop_flat_map(|w| {
            prop::collection::vec(prop::collection::vec(any::<u8>(), w), 1..10)
        })) {
            let grid = Grid::from_rows(rows.clone()).unwrap();
            prop_assert_eq!(grid.height(), rows.len());
            for (y, row) in rows.iter().enumerate() {
                for (x, value) in row.iter().enumerate() {
                    prop_assert_eq!(grid.get(Point::new(x as i64, y as i64)), Ok(value));
                }
            }
        }

        #[test]
        fn prop_outside_lookup_fails((w, h) in dims(), x in -20i64..40, y in -20i64..40) {
            let grid = Grid::from_fn(w, h, |p| p.x + p.y);
            let inside = x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h;
            let result = grid.get(Point::new(x, y));
            let expected = x + y;
            if inside {
                prop_assert_eq!(result, Ok(&expected));
            } else {
                prop_assert_eq!(result, Err(GridError::OutOfBounds(Point::new(x, y))));
            }
        }
    }
}
