//! Types modeling the input files.

pub mod cedict;
