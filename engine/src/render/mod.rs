//! Render Module
//!
//! The boundary between the walkthrough core and the renderer. No GPU work
//! happens here: the core produces matrices and a draw list, and the
//! renderer uploads and draws them.

pub mod uniforms;

pub use uniforms::{DrawCommand, ObjectUniforms, build_draw_list, draw_model_matrix};
