/// Errors raised by the plane and conic fitting operations.
///
/// Fitting failures are raised synchronously to the immediate caller: a
/// malformed shape descriptor would silently corrupt downstream planning,
/// so there are no silent defaults. Note that "no contact" is *not* a fit
/// error; it is a valid empty extraction result.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    /// Fewer points than the minimum required by the fit.
    #[error("{found} point(s) given but the fit requires at least {needed}")]
    InsufficientPoints {
        /// The minimum number of points required by the fit.
        needed: usize,
        /// The number of points actually given.
        found: usize,
    },

    /// A conic recovery received a parameter vector of the wrong
    /// dimensionality.
    #[error("conic parameter vector has {0} coefficient(s) instead of 6")]
    InvalidParameterCount(usize),

    /// The direct ellipse fit found no eigenvector satisfying the ellipse
    /// discriminant `4AC - B² > 0`. Retrying with the circle fit may
    /// succeed.
    #[error("no eigenvector satisfies the ellipse constraint 4AC - B² > 0")]
    NoValidEllipse,

    /// The coefficients do not describe a real, non-degenerate conic
    /// (e.g. a negative radicand while recovering a radius).
    #[error("the coefficients do not describe a real, non-degenerate conic")]
    DegenerateConic,
}
