use tangent::Float;

/// Dense square matrix in row-major storage.
///
/// Sized for the small `3n×3n` systems the spline fit assembles; not a
/// general linear-algebra type.
#[derive(Debug, Clone)]
pub struct DenseMatrix<F> {
    n: usize,
    data: Vec<F>,
}

impl<F: Float> DenseMatrix<F> {
    /// An `n×n` matrix of zeros.
    pub fn zeros(n: usize) -> Self {
        DenseMatrix {
            n,
            data: vec![F::zero(); n * n],
        }
    }

    /// Matrix dimension.
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> F {
        self.data[row * self.n + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: F) {
        self.data[row * self.n + col] = value;
    }
}

/// Solve `A·x = b` by Gaussian elimination with partial pivoting.
///
/// Returns `None` when a pivot is zero or near-zero (singular system).
pub fn solve<F: Float>(a: &DenseMatrix<F>, b: &[F]) -> Option<Vec<F>> {
    let n = a.n;
    debug_assert_eq!(b.len(), n);

    let mut m = a.data.clone();
    let mut rhs = b.to_vec();
    let tol = F::from(1e-12).unwrap_or_else(F::epsilon);

    for col in 0..n {
        // Pivot search down the column.
        let mut max_row = col;
        let mut max_val = m[col * n + col].abs();
        for row in (col + 1)..n {
            let v = m[row * n + col].abs();
            if v > max_val {
                max_val = v;
                max_row = row;
            }
        }

        if max_val < tol {
            return None;
        }

        if max_row != col {
            for j in 0..n {
                m.swap(col * n + j, max_row * n + j);
            }
            rhs.swap(col, max_row);
        }

        let pivot = m[col * n + col];
        for row in (col + 1)..n {
            let factor = m[row * n + col] / pivot;
            if factor == F::zero() {
                continue;
            }
            for j in col..n {
                let v = m[col * n + j];
                m[row * n + j] = m[row * n + j] - factor * v;
            }
            let r = rhs[col];
            rhs[row] = rhs[row] - factor * r;
        }
    }

    // Back substitution.
    let mut x = vec![F::zero(); n];
    for i in (0..n).rev() {
        let mut sum = rhs[i];
        for j in (i + 1)..n {
            sum = sum - m[i * n + j] * x[j];
        }
        x[i] = sum / m[i * n + i];
    }

    Some(x)
}
