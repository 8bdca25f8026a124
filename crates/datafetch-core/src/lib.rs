pub mod action;
pub mod archive;
pub mod console;
pub mod error;
pub mod handlers;
pub mod io;
pub mod manifest;
pub mod process;
pub mod requirements;
pub mod runner;

pub use error::{FetchError, Result};
