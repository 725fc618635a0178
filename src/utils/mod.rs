//! Miscellaneous utilities over point clouds and vectors.

pub use self::center::center;
pub use self::cov::center_cov;
pub use self::wbasis::orthonormal_basis;

mod center;
mod cov;
mod wbasis;
