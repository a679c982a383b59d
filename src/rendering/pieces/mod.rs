//! Checker pieces rendering module

pub mod pieces;

pub use pieces::*;
