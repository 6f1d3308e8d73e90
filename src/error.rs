use derive_more::{Display, From};
use ndarray::ShapeError;

pub type Result<T> = core::result::Result<T, FieldError>;

#[derive(Debug, Display, From)]
pub enum FieldError {
    /// Input arrays could not be broadcast together.
    #[display("{_0}")]
    Shape(ShapeError),
    /// A reduction was asked of an array with no elements.
    #[display("cannot reduce an empty field")]
    #[from(skip)]
    EmptyField,
    /// A transform matrix has no inverse.
    #[display("transform matrix is not invertible")]
    #[from(skip)]
    SingularTransform,
}

impl std::error::Error for FieldError {}
