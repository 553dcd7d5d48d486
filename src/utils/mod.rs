//! The `utils` module provides the pieces shared across `minipub`: the crate-wide
//! error type and the tracing subscriber setup.

pub mod error;
pub mod logging;

#[cfg(test)]
mod tests;
