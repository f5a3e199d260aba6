//! Text-level helpers shared by normalization and section sync.
//!
//! # Responsibility
//! - Turn pasted/contaminated markdown into canonical markdown text.
//! - Provide literal-safe pattern construction for user-controlled strings.

pub mod escape;
pub mod html;
pub mod normalize;
