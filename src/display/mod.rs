//! Seven-segment LED panel planning.
//!
//! This module provides functionality to:
//! - Lay display strings out as right-justified digit cells
//! - Plan per-LED pixel frames for the NeoPixel strip
//! - Draw the panel as ASCII art for the console mode

pub mod panel;
pub mod segments;
