/// Failure of a forward or inverse projection transform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TransformError {
    /// The input coordinate lies outside the domain of the transform.
    OutOfDomain { axis: &'static str, value: f64 },
    /// The transform produced a non-finite result.
    NonFinite,
    /// An iterative inversion did not converge.
    NotConverged { iterations: u32 },
}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformError::OutOfDomain { axis, value } => {
                write!(f, "{axis} value {value} outside transform domain")
            }
            TransformError::NonFinite => write!(f, "transform produced a non-finite coordinate"),
            TransformError::NotConverged { iterations } => {
                write!(f, "iteration did not converge after {iterations} steps")
            }
        }
    }
}

impl std::error::Error for TransformError {}
