//! Centralized error type for the loudmeter umbrella crate.
//!
//! Wraps core errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] loudmeter_core::Error),

    #[error("Channel layout has {layout} channels but {weights} weights were given")]
    LayoutMismatch { layout: usize, weights: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
