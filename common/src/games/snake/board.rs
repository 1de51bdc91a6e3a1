use super::types::{Cell, FieldSize, Point};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    field_size: FieldSize,
}

impl Board {
    pub fn new(field_size: FieldSize) -> Self {
        Self {
            cells: vec![Cell::Empty; field_size.width * field_size.height],
            field_size,
        }
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    /// Returns `None` for points outside the board.
    pub fn get(&self, point: Point) -> Option<Cell> {
        self.index_of(point).map(|idx| self.cells[idx])
    }

    /// Writes outside the board are ignored.
    pub fn set(&mut self, point: Point, cell: Cell) {
        if let Some(idx) = self.index_of(point) {
            self.cells[idx] = cell;
        }
    }

    pub fn empty_positions(&self) -> Vec<Point> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| self.point_of(idx))
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.field_size.width)
    }

    fn index_of(&self, point: Point) -> Option<usize> {
        if !self.field_size.contains(point) {
            return None;
        }
        Some(point.y as usize * self.field_size.width + point.x as usize)
    }

    fn point_of(&self, idx: usize) -> Point {
        Point::new(
            (idx % self.field_size.width) as i32,
            (idx / self.field_size.width) as i32,
        )
    }
}
