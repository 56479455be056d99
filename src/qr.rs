//! QR factorization of a tall design matrix with equilibrated columns
use linfa_linalg::norm::Norm;
use linfa_linalg::qr::QRInto;
use linfa_linalg::triangular::{IntoTriangular, SolveTriangularInplace, UPLO};
use ndarray::linalg::general_mat_mul;
use ndarray::{s, Array1, Array2, ArrayBase, ArrayView1, Axis, Data, Ix1, Zip};

use crate::error::Result;
use crate::{scratch, Float};

/// Thin factorization `A S⁻¹ = QR` of an `m x n` matrix with `m >= n`.
///
/// `S` is diagonal and holds the euclidean norms of the columns of `A`, so every column of
/// `A S⁻¹` has unit length. Zero columns are left as they are. The diagonal of `R` then measures
/// the distance of each column to the span of the columns before it, whatever the column units.
pub(crate) struct Qr<F> {
    q: Array2<F>,
    r: Array2<F>,
    scale: Array1<F>,
}

impl<F: Float> Qr<F> {
    /// Factorize `a`, taking ownership of its storage
    pub fn factorize(mut a: Array2<F>) -> Result<Self> {
        let n = a.ncols();

        let mut scale = scratch::zeros1(n)?;
        Zip::from(a.columns_mut())
            .and(&mut scale)
            .for_each(|mut col, s| {
                let norm = column_norm(&col);
                *s = if norm > F::zero() { norm } else { F::one() };
                let s = *s;
                col.mapv_inplace(|x| x / s);
            });

        let (q, r) = a.qr_into()?.into_decomp();

        Ok(Qr {
            q: q.slice_move(s![.., ..n]),
            r: r.slice_move(s![..n, ..n]).into_triangular(UPLO::Upper)?,
            scale,
        })
    }

    /// Diagonal of `R`
    pub fn r_diagonal(&self) -> ArrayView1<'_, F> {
        self.r.diag()
    }

    /// Index of the first column whose distance to the span of the columns before it, relative
    /// to its own norm, is at most `tolerance`. Without column pivoting this is the first column
    /// lying (numerically) in the span of its predecessors. A NaN on the diagonal counts as
    /// dependent.
    pub fn first_dependent_column(&self, tolerance: F) -> Option<usize> {
        self.r_diagonal()
            .iter()
            .position(|x| x.is_nan() || x.abs() <= tolerance)
    }

    /// Least squares solution of `A x ≈ b`
    ///
    /// `R` must be non-singular, see [`first_dependent_column`](Self::first_dependent_column).
    pub fn solve<D: Data<Elem = F>>(&self, b: &ArrayBase<D, Ix1>) -> Result<Array1<F>> {
        let mut x = self.q.t().dot(b).insert_axis(Axis(1));
        self.r.solve_triangular_inplace(&mut x, UPLO::Upper)?;

        Ok(x.remove_axis(Axis(1)) / &self.scale)
    }

    /// `(AᵗA)⁻¹ = S⁻¹R⁻¹R⁻ᵗS⁻¹`, obtained from the triangular factor without forming `AᵗA`
    pub fn inverse_gram(&self) -> Result<Array2<F>> {
        let n = self.r.nrows();

        let mut r_inv = scratch::zeros2(n, n)?;
        r_inv.diag_mut().fill(F::one());
        self.r.solve_triangular_inplace(&mut r_inv, UPLO::Upper)?;

        let mut gram_inv = scratch::zeros2(n, n)?;
        general_mat_mul(F::one(), &r_inv, &r_inv.t(), F::zero(), &mut gram_inv);

        let scale = &self.scale;
        Zip::indexed(&mut gram_inv).for_each(|(i, j), g| *g = *g / (scale[i] * scale[j]));

        Ok(gram_inv)
    }
}

/// Euclidean norm, scaled by the largest magnitude to avoid overflow in the squares
fn column_norm<F: Float, D: Data<Elem = F>>(x: &ArrayBase<D, Ix1>) -> F {
    let largest = x.norm_max();
    if largest == F::zero() {
        return F::zero();
    }

    largest * x.mapv(|v| v / largest).norm_l2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn reproduces_the_input() {
        let a = array![[3., 1.], [4., -2.], [0., 5.], [12., 1.]];
        let qr = Qr::factorize(a.clone()).unwrap();

        assert_abs_diff_eq!(qr.q.t().dot(&qr.q), Array2::<f64>::eye(2), epsilon = 1e-12);
        assert_abs_diff_eq!(qr.r[[1, 0]], 0.);

        let scaled_back = qr.q.dot(&qr.r) * &qr.scale;
        assert_abs_diff_eq!(scaled_back, a, epsilon = 1e-12);
    }

    #[test]
    fn diagonal_is_relative_to_column_norms() {
        let qr = Qr::factorize(array![[1., 0.], [0., 1.], [1., 1.]]).unwrap();

        // column 1 makes an angle of 60 degrees with column 0
        let diag = qr.r_diagonal().mapv(f64::abs);
        assert_abs_diff_eq!(diag, array![1., 0.75f64.sqrt()], epsilon = 1e-12);
    }

    #[test]
    fn solves_square_system() {
        let a = array![[2., 1., 0.], [1., 3., 1.], [0., 1., 4.]];
        let x = array![1., -1., 2.];
        let b = a.dot(&x);

        let qr = Qr::factorize(a).unwrap();

        assert_abs_diff_eq!(qr.solve(&b).unwrap(), x, epsilon = 1e-12);
    }

    #[test]
    fn inverse_gram_matches_normal_equations() {
        let a = array![[1., 0.], [0., 1.], [1., 1.]];
        let qr = Qr::factorize(a).unwrap();

        let expected = array![[2., -1.], [-1., 2.]] / 3.;
        assert_abs_diff_eq!(qr.inverse_gram().unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn inverse_gram_undoes_column_scaling() {
        let a = array![[1., 0.], [0., 1e-6], [1., 1e-6]];
        let qr = Qr::factorize(a).unwrap();

        let expected = array![[2., -1e6], [-1e6, 2e12]] / 3.;
        let gram_inv = qr.inverse_gram().unwrap();
        assert_abs_diff_eq!(gram_inv[[0, 0]], expected[[0, 0]], epsilon = 1e-10);
        assert_abs_diff_eq!(gram_inv[[0, 1]] / 1e6, expected[[0, 1]] / 1e6, epsilon = 1e-10);
        assert_abs_diff_eq!(gram_inv[[1, 1]] / 1e12, expected[[1, 1]] / 1e12, epsilon = 1e-10);
    }

    #[test]
    fn detects_dependent_columns() {
        let independent = Qr::factorize(array![[1., 2.], [3., 4.], [5., 7.]]).unwrap();
        let duplicated = Qr::factorize(array![[1., 2., 2.], [3., 4., 4.], [5., 7., 7.]]).unwrap();
        let zero = Qr::factorize(array![[0., 1.], [0., 2.], [0., 3.]]).unwrap();

        assert_eq!(independent.first_dependent_column(1e-12), None);
        assert_eq!(duplicated.first_dependent_column(1e-12), Some(2));
        assert_eq!(zero.first_dependent_column(1e-12), Some(0));
    }

    #[test]
    fn dependence_ignores_column_units() {
        let qr = Qr::factorize(array![
            [1e8, 1e-6],
            [2e8, 0.],
            [3e8, 1e-6],
            [4e8, 3e-6]
        ])
        .unwrap();

        assert_eq!(qr.first_dependent_column(1e-12), None);
    }

    #[test]
    fn norm_survives_large_entries() {
        let x = array![3e200, 4e200];

        assert_abs_diff_eq!(column_norm(&x), 5e200, epsilon = 1e188);
    }
}
