//! inkcore - shared library for ink applications
//!
//! Pure black-and-white widgets, dithered overlays, repaint governing,
//! and preference storage.

pub mod dither;
pub mod repaint;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use repaint::RepaintController;
pub use theme::InkTheme;
