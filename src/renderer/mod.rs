//! Screen Renderer Module
//!
//! Draws the editor screen with VT100 sequences, one buffered write per
//! frame.

mod frame;

pub use frame::FrameRenderer;
