//! Interactive session

pub mod runner;

pub use runner::SessionRunner;
