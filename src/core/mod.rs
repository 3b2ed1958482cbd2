//! Core-Domänentypen: Bézier-Pfade, Pfad-Verwaltung, Feld-Abbildung, Export.

pub mod background_image;
/// Einzelner stückweise kubischer Bézier-Pfad
pub mod bezier_path;
pub mod curve_set;
pub mod export;
pub mod field_mapping;

pub use background_image::BackgroundImage;
pub use bezier_path::{
    cubic_bezier, BezierPath, ContinuityPolicy, HandleSide, PathColor, PointRole,
    SegmentExtension, MIN_PATH_POINTS,
};
pub use curve_set::{
    CurveSet, CurveSetConfig, DragState, HoverTarget, LeaveBehavior, DEFAULT_CURVE_FIELD,
};
pub use export::{export_path, format_coordinate};
pub use field_mapping::{
    CoordinateMapping, FieldMapping, FIELD_MARGIN_RATIO, FIELD_SIZE, LOGICAL_CANVAS_SIZE,
};
