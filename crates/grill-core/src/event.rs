#![forbid(unsafe_code)]

//! Gesture samples and container notifications.
//!
//! The presentation layer reports each pointer-drag lifecycle step as a
//! [`GestureInfo`]. The placement engine answers with [`GrillEvent`]
//! notifications fired on the container; they carry no payload.

use serde::{Deserialize, Serialize};

use crate::geometry::PixelPoint;

/// One pointer sample from a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureInfo {
    /// Position of the dragged visual (the tile itself, or its proxy)
    /// relative to the container.
    pub position: PixelPoint,
}

impl GestureInfo {
    /// Create a sample at the given position.
    #[must_use]
    pub const fn new(position: PixelPoint) -> Self {
        Self { position }
    }

    /// Create a sample from raw `top`/`left` pixel values.
    #[must_use]
    pub const fn at(top: f64, left: f64) -> Self {
        Self::new(PixelPoint::new(top, left))
    }
}

/// Notification fired on the container during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrillEvent {
    /// A drag session started.
    DragStart,
    /// A move sample was processed.
    Drag,
    /// The drag ended and the new order was committed.
    DragStop,
}

impl GrillEvent {
    /// Namespaced event name, as subscribers see it on the container.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DragStart => "grill:dragstart",
            Self::Drag => "grill:drag",
            Self::DragStop => "grill:dragstop",
        }
    }
}

impl std::fmt::Display for GrillEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
