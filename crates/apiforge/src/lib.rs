//! Generation driver for the `apiforge` binary.

pub mod generate;

pub use generate::{run, GenerateError};
