//! VexPath Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use crate::core::{
    export_path, format_coordinate, BackgroundImage, BezierPath, ContinuityPolicy,
    CoordinateMapping, CurveSet, CurveSetConfig, FieldMapping, HoverTarget, LeaveBehavior,
    PathColor, SegmentExtension,
};
pub use shared::{EditorOptions, RenderScene};
