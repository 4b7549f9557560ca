//! Pre-allocated path storage for Monte Carlo simulation.
//!
//! This module provides [`PathMatrix`], the buffer the simulator writes
//! prices into and the aggregator reduces.
//!
//! # Memory Layout
//!
//! The matrix is **step-major**: all paths for step 0, then all paths for
//! step 1, and so on. `data[step * n_paths + path]` holds the price of
//! `path` at `step`, and row 0 holds the initial spot. Per-step reductions
//! (mean, sort, nearest-rank) therefore work on one contiguous slice.

/// Step-major matrix of simulated prices, `(n_steps + 1) × n_paths`.
///
/// The buffer is reused across runs: [`resize`](Self::resize) only grows the
/// underlying allocation.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PathMatrix;
///
/// let mut matrix = PathMatrix::new(4, 3);
/// matrix.step_mut(0).fill(100.0);
///
/// assert_eq!(matrix.n_rows(), 4);
/// assert_eq!(matrix.step(0), &[100.0; 4]);
/// assert_eq!(matrix.final_step().len(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathMatrix {
    /// Row-per-step storage, `(n_steps + 1) * n_paths` long.
    data: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
}

impl PathMatrix {
    /// Creates a zero-filled matrix for `n_paths` paths of `n_steps` steps.
    pub fn new(n_paths: usize, n_steps: usize) -> Self {
        let mut matrix = Self::default();
        matrix.resize(n_paths, n_steps);
        matrix
    }

    /// Reshapes the matrix, growing the allocation if required.
    ///
    /// Contents after a resize are unspecified; the simulator overwrites
    /// every cell.
    pub fn resize(&mut self, n_paths: usize, n_steps: usize) {
        let cells = n_paths * (n_steps + 1);
        self.data.resize(cells, 0.0);
        self.n_paths = n_paths;
        self.n_steps = n_steps;
    }

    /// Number of paths (row width).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps, excluding the initial row.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Number of rows, `n_steps + 1`.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_steps + 1
    }

    /// Prices of every path at `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step > n_steps`.
    #[inline]
    pub fn step(&self, step: usize) -> &[f64] {
        let start = step * self.n_paths;
        &self.data[start..start + self.n_paths]
    }

    /// Mutable prices of every path at `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step > n_steps`.
    #[inline]
    pub fn step_mut(&mut self, step: usize) -> &mut [f64] {
        let start = step * self.n_paths;
        &mut self.data[start..start + self.n_paths]
    }

    /// Prices of every path at the last step.
    #[inline]
    pub fn final_step(&self) -> &[f64] {
        self.step(self.n_steps)
    }

    /// Mutable access to each row in step order.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [f64]> {
        let n_paths = self.n_paths.max(1);
        let cells = self.n_paths * self.n_rows();
        self.data[..cells].chunks_exact_mut(n_paths)
    }

    /// Sets a single cell.
    #[inline]
    pub fn set(&mut self, step: usize, path: usize, price: f64) {
        debug_assert!(path < self.n_paths);
        self.data[step * self.n_paths + path] = price;
    }

    /// Returns total memory held by the buffer in bytes.
    #[inline]
    pub fn memory_usage(&self) -> usize {
        self.data.capacity() * std::mem::size_of::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_step_major() {
        let mut matrix = PathMatrix::new(3, 2);
        for step in 0..=2 {
            for path in 0..3 {
                matrix.set(step, path, (step * 10 + path) as f64);
            }
        }
        assert_eq!(matrix.step(0), &[0.0, 1.0, 2.0]);
        assert_eq!(matrix.step(1), &[10.0, 11.0, 12.0]);
        assert_eq!(matrix.final_step(), &[20.0, 21.0, 22.0]);
    }

    #[test]
    fn test_rows_mut_visits_every_row() {
        let mut matrix = PathMatrix::new(2, 4);
        for (i, row) in matrix.rows_mut().enumerate() {
            row.fill(i as f64);
        }
        assert_eq!(matrix.rows_mut().count(), 5);
        assert_eq!(matrix.step(3), &[3.0, 3.0]);
    }

    #[test]
    fn test_resize_reuses_allocation() {
        let mut matrix = PathMatrix::new(100, 10);
        let before = matrix.memory_usage();

        matrix.resize(10, 5);
        assert_eq!(matrix.n_paths(), 10);
        assert_eq!(matrix.n_steps(), 5);
        assert_eq!(matrix.final_step().len(), 10);
        assert_eq!(matrix.memory_usage(), before);

        matrix.resize(200, 10);
        assert!(matrix.memory_usage() > before);
        assert_eq!(matrix.step(10).len(), 200);
    }
}
