//! hello-remote - greet the user and do one bit of arithmetic
//!
//! A session prints a greeting, echoes the user's name and favorite
//! language, then reads two numbers and an operation and prints the result.
//! Any invalid input ends the session with a one-line message.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use hello_remote::SessionRunner;
//!
//! let input = Cursor::new("Alice\nGo\n4\n2\n+\n");
//! let mut runner = SessionRunner::new(input, Vec::new());
//! assert_eq!(runner.run().unwrap(), 6.0);
//! ```

pub mod cli;
pub mod engine;
pub mod error;
pub mod output;
pub mod session;

pub use engine::{parse_number, Operation};
pub use error::{Result, SessionError};
pub use output::format_general;
pub use session::SessionRunner;
