#![forbid(unsafe_code)]

//! Text front end: renders quiz screens as lines and reads answers line by line.

pub mod driver;
pub mod error;
pub mod view;

pub use driver::{ConsoleExit, ConsoleFrontend, EXIT_SENTINEL};
pub use error::ConsoleError;
pub use view::ConsoleView;
