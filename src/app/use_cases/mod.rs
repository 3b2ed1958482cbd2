//! Use-Cases: fachliche Abläufe auf dem AppState.

pub mod background_image;
pub mod drag;
pub mod editing;
pub mod export;
