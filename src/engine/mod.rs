//! Number parsing and arithmetic

pub mod number;
pub mod operation;

pub use number::parse_number;
pub use operation::Operation;
