pub mod math;
pub mod loss;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use math::numgrad::numerical_gradient;
pub use loss::softmax::SoftmaxLoss;
