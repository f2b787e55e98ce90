//! Coordinate grids and dense matrices.
//!
//! - [`linspace`]: evenly spaced samples over a closed interval
//! - [`meshgrid`]: Cartesian coordinate meshes from two axes
//! - [`Matrix`]: row-major dense matrix used for scenario results
//!
//! Mesh layout follows the usual "xy" convention: row `i` corresponds to
//! `ys[i]`, column `j` to `xs[j]`.

use num_traits::Float;

use crate::types::GridError;

/// Returns `n` evenly spaced samples over `[start, stop]`.
///
/// The last sample is exactly `stop` (for `n >= 2`), and interior samples are
/// computed as `start + i * step` so that repeated calls give identical
/// results. `n == 0` yields an empty vector and `n == 1` yields `[start]`.
///
/// # Examples
/// ```
/// use pricer_core::math::grid::linspace;
///
/// let xs = linspace(0.0_f64, 1.0, 5);
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace<T: Float>(start: T, stop: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            // n - 1 always fits in T for the sizes we generate
            let div = T::from(n - 1).unwrap_or_else(T::one);
            let step = (stop - start) / div;
            let mut values: Vec<T> = (0..n)
                .map(|i| start + T::from(i).unwrap_or_else(T::zero) * step)
                .collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// Builds coordinate meshes from two axes.
///
/// Returns `(X, Y)`, both `ys.len() x xs.len()`, with `X[i][j] = xs[j]` and
/// `Y[i][j] = ys[i]`.
///
/// # Examples
/// ```
/// use pricer_core::math::grid::meshgrid;
///
/// let (x, y) = meshgrid(&[1.0_f64, 2.0, 3.0], &[10.0, 20.0]);
/// assert_eq!(x.shape(), (2, 3));
/// assert_eq!(x.get(1, 2), 3.0);
/// assert_eq!(y.get(1, 2), 20.0);
/// ```
pub fn meshgrid<T: Float>(xs: &[T], ys: &[T]) -> (Matrix<T>, Matrix<T>) {
    let rows = ys.len();
    let cols = xs.len();
    let x = Matrix::from_fn(rows, cols, |_, j| xs[j]);
    let y = Matrix::from_fn(rows, cols, |i, _| ys[i]);
    (x, y)
}

/// Dense row-major matrix.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy> Matrix<T> {
    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    /// `GridError::ShapeMismatch` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, GridError> {
        if data.len() != rows * cols {
            return Err(GridError::ShapeMismatch {
                expected: rows * cols,
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Fallible variant of [`Matrix::from_fn`]; stops at the first error.
    pub fn try_from_fn<F, E>(rows: usize, cols: usize, mut f: F) -> Result<Self, E>
    where
        F: FnMut(usize, usize) -> Result<T, E>,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j)?);
            }
        }
        Ok(Self { rows, cols, data })
    }

    /// Returns `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        self.data[row * self.cols + col]
    }

    /// Returns row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterates over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Row-major element slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Applies `f` elementwise.
    pub fn map<U: Copy, F: FnMut(T) -> U>(&self, f: F) -> Matrix<U> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Converts into nested row vectors.
    pub fn to_nested(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }
}
