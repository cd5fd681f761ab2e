pub mod softmax;

pub use softmax::SoftmaxLoss;
