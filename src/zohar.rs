//! The Zohar-Trench Toeplitz solver (component C): an O(n^2) direct solve for a general
//! (non-symmetric) Toeplitz system, with an in-place and a symmetric-matrix convenience variant.
//!
//! Zohar's bordering recursion solves the symmetric, positive-definite Yule-Walker normal
//! equations (the `solve_symmetric` special case below) as well as the more general asymmetric
//! Toeplitz system, in the same O(n^2) time, without linking against BLAS or LAPACK.

use crate::error::CoreError;
use crate::numeric::Scalar;

/// Solve `L * s = d` for the general Toeplitz matrix `L` whose first row is `(1, a)` (reversed)
/// and whose first column is `(1, r)`.
///
/// # Arguments
///
/// * `a` - First-row entries (reversed), length `n >= 1`.
/// * `r` - First-column entries, length `n` (same as `a`).
/// * `d` - Right-hand side, length `n + 1`.
///
/// # Returns
///
/// * `Ok(s)` with `s.len() == n + 1` on success, `Err(CoreError::EmptySystem)` if `a` is empty.
///
/// # Example
///
/// ```
/// use autoreg::zohar;
/// // L = I (a = r = 0), so s = d.
/// let a = [0.0, 0.0, 0.0];
/// let r = [0.0, 0.0, 0.0];
/// let d = [1.0, 2.0, 3.0, 4.0];
/// let s = zohar::solve(&a, &r, &d).unwrap();
/// assert_eq!(s, vec![1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn solve<V: Scalar>(a: &[V], r: &[V], d: &[V]) -> Result<Vec<V>, CoreError> {
    let n = a.len();
    if n < 1 {
        return Err(CoreError::EmptySystem);
    }
    debug_assert_eq!(r.len(), n, "a and r must have equal length");
    debug_assert_eq!(d.len(), n + 1, "d must have length n + 1");
    tracing::trace!(n, "zohar::solve");

    let mut s: Vec<V> = vec![d[0]];
    let mut e_hat: Vec<V> = vec![V::zero() - a[0]];
    let mut g: Vec<V> = vec![V::zero() - r[0]];
    let mut lambda: V = V::one() - a[0] * r[0];

    for i in 1..=n {
        let r_hat: Vec<V> = r[0..i].iter().rev().cloned().collect();

        let mut neg_theta = V::zero() - d[i];
        for j in 0..i {
            neg_theta += s[j] * r_hat[j];
        }
        let theta_over_lambda = (V::zero() - neg_theta) / lambda;

        if i < n {
            let mut neg_eta = a[i];
            for j in 0..i {
                neg_eta += e_hat[j] * a[j];
            }
            let mut neg_gamma = r[i];
            for j in 0..i {
                neg_gamma += g[j] * r_hat[j];
            }
            let eta_over_lambda = (V::zero() - neg_eta) / lambda;
            let gamma_over_lambda = (V::zero() - neg_gamma) / lambda;

            let mut next_e_hat: Vec<V> = Vec::with_capacity(i + 1);
            next_e_hat.push(eta_over_lambda);
            for j in 0..i {
                next_e_hat.push(e_hat[j] + eta_over_lambda * g[j]);
            }

            for j in 0..i {
                s[j] += theta_over_lambda * e_hat[j];
                g[j] += gamma_over_lambda * e_hat[j];
            }
            s.push(theta_over_lambda);
            g.push(gamma_over_lambda);

            e_hat = next_e_hat;
            lambda = lambda - neg_eta * neg_gamma / lambda;
        } else {
            for j in 0..i {
                s[j] += theta_over_lambda * e_hat[j];
            }
            s.push(theta_over_lambda);
        }
    }

    Ok(s)
}

/// Like `solve`, but writes the result back into `d` instead of allocating a fresh output vector.
///
/// # Arguments
///
/// * `a` - First-row entries (reversed), length `n >= 1`.
/// * `r` - First-column entries, length `n` (same as `a`).
/// * `d` - Right-hand side on entry, length `n + 1`; overwritten with `s` on return.
///
/// # Returns
///
/// * `Ok(())` on success, `Err(CoreError::EmptySystem)` if `a` is empty.
pub fn solve_in_place<V: Scalar>(a: &[V], r: &[V], d: &mut [V]) -> Result<(), CoreError> {
    let s = solve(a, r, d)?;
    d.copy_from_slice(&s);
    Ok(())
}

/// `solve` specialized to a symmetric Toeplitz matrix (first row and column share the same data).
/// Equivalent to `solve(a, a, d)`.
///
/// # Arguments
///
/// * `a` - Shared first-row/first-column entries, length `n >= 1`.
/// * `d` - Right-hand side, length `n + 1`.
///
/// # Returns
///
/// * `Ok(s)` with `s.len() == n + 1` on success, `Err(CoreError::EmptySystem)` if `a` is empty.
///
/// # Example
///
/// ```
/// use autoreg::zohar;
/// let a = [0.5, 0.25];
/// let d = [1.0, 0.0, 0.0];
/// let s = zohar::solve_symmetric(&a, &d).unwrap();
/// // L * s should reproduce d.
/// let l = [[1.0, 0.5, 0.25], [0.5, 1.0, 0.5], [0.25, 0.5, 1.0]];
/// for row in 0..3 {
///     let lhs: f64 = (0..3).map(|col| l[row][col] * s[col]).sum();
///     assert!((lhs - d[row]).abs() < 1e-9);
/// }
/// ```
pub fn solve_symmetric<V: Scalar>(a: &[V], d: &[V]) -> Result<Vec<V>, CoreError> {
    solve(a, a, d)
}
