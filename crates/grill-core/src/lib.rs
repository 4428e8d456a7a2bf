#![forbid(unsafe_code)]

//! Core: pixel geometry, gesture samples, notifications, and rate limiting.
//!
//! # Role in Grill
//! `grill-core` is the leaf crate. It defines the values the presentation
//! layer hands to the placement engine (pointer samples in pixels) and the
//! notifications the engine hands back, plus the time-based schedulers that
//! cap how often pointer-move samples are processed.
//!
//! # How it fits in the system
//! `grill-layout` consumes [`geometry::PixelPoint`] and
//! [`event::GestureInfo`] to resolve grid cells, and the `grill` facade wires
//! [`rate_limit::Throttle`] in front of the drag session's move handler.

pub mod event;
pub mod geometry;
pub mod rate_limit;

pub use event::{GestureInfo, GrillEvent};
pub use geometry::PixelPoint;
pub use rate_limit::{Debounce, Debounced, Throttle, Throttled};
