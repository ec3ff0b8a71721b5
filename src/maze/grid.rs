/// Dense row-major matrix indexed by `(column, row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Box<[T]>,
    width: usize,
    height: usize,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, value: T) -> Self {
        let data = vec![value; width * height].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }
}

impl<T> Grid<T> {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn in_bounds(&self, coord: (usize, usize)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get(&self, coord: (usize, usize)) -> Option<&T> {
        self.in_bounds(coord)
            .then(|| &self.data[self.ravel_index(coord.0, coord.1)])
    }

    pub fn get_mut(&mut self, coord: (usize, usize)) -> Option<&mut T> {
        if self.in_bounds(coord) {
            let idx = self.ravel_index(coord.0, coord.1);
            Some(&mut self.data[idx])
        } else {
            None
        }
    }

    /// Iterates over the entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> std::ops::Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            self.in_bounds(index),
            "Index {:?} is out of bounds for a {}x{} grid",
            index,
            self.width,
            self.height
        );
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            self.in_bounds(index),
            "Index {:?} is out of bounds for a {}x{} grid",
            index,
            self.width,
            self.height
        );
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexing_is_column_then_row() {
        let mut grid = Grid::new(3, 2, 0u8);
        grid[(2, 1)] = 7;
        assert_eq!(grid[(2, 1)], 7);
        assert_eq!(grid.iter().position(|&v| v == 7), Some(5));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(3, 2, false);
        assert!(grid.get((3, 0)).is_none());
        assert!(grid.get((0, 2)).is_none());
        assert_eq!(grid.get((2, 1)), Some(&false));
    }

    #[test]
    fn test_empty_dimension() {
        let grid = Grid::new(0, 4, true);
        assert_eq!(grid.iter().count(), 0);
        assert!(!grid.in_bounds((0, 0)));
    }

    #[test]
    #[should_panic]
    fn test_index_panics_out_of_bounds() {
        let grid = Grid::new(2, 2, 0u8);
        let _ = grid[(0, 2)];
    }
}
