//! Internal modules for ratify

pub mod config;
#[macro_use]
pub mod macros;
pub mod output;
pub mod literal;
#[macro_use]
pub mod formula;
pub mod input;
pub mod parser;
pub mod propagate;
pub mod rat;
pub mod verifier;
pub mod sick;
pub mod generate;
pub mod brute;
