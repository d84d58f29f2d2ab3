pub mod api;
pub mod cli;
pub mod error;
pub mod gallery;

pub use error::{GaleriaError, Result};
