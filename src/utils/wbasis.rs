use crate::math::{Real, UnitVector, Vector};

/// Computes an orthonormal basis of the plane orthogonal to `n`.
///
/// Uses the branchless construction from Pixar's "Building an Orthonormal
/// Basis, Revisited"; the returned pair `[u, v]` is such that `(u, v, n)`
/// is a right-handed orthonormal frame.
pub fn orthonormal_basis(n: &UnitVector<Real>) -> [Vector<Real>; 2] {
    let sign = 1.0_f64.copysign(n.z);
    let a = -1.0 / (sign + n.z);
    let b = n.x * n.y * a;

    [
        Vector::new(1.0 + sign * n.x * n.x * a, sign * b, -sign * n.x),
        Vector::new(b, sign + n.y * n.y * a, -n.y),
    ]
}

#[cfg(test)]
mod test {
    use super::orthonormal_basis;
    use crate::math::{UnitVector, Vector};

    #[test]
    fn basis_is_orthonormal() {
        for dir in [
            Vector::new(1.0, 0.0, 0.0),
            Vector::new(0.0, 0.0, -1.0),
            Vector::new(1.0, -2.0, 0.5),
        ] {
            let n = UnitVector::new_normalize(dir);
            let [u, v] = orthonormal_basis(&n);

            assert_relative_eq!(u.norm(), 1.0, epsilon = 1.0e-10);
            assert_relative_eq!(v.norm(), 1.0, epsilon = 1.0e-10);
            assert_relative_eq!(u.dot(&v), 0.0, epsilon = 1.0e-10);
            assert_relative_eq!(u.dot(&n), 0.0, epsilon = 1.0e-10);
            assert_relative_eq!(v.dot(&n), 0.0, epsilon = 1.0e-10);
            assert_relative_eq!(u.cross(&v), n.into_inner(), epsilon = 1.0e-10);
        }
    }
}
