pub mod attacks;
pub mod random;
