pub mod input;
pub mod rejection;

pub use rejection::Rejection;
