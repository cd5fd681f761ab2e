pub mod matrix;
pub mod numgrad;

pub use matrix::Matrix;
pub use numgrad::numerical_gradient;
