//! Editor Core Module
//!
//! Platform-independent editor state. Currently this is the cursor model;
//! it never touches the terminal and is fully deterministic.

mod cursor;

pub use cursor::{Cursor, Direction};
