// Pure domain services

pub mod normalizer;

pub use normalizer::*;
