//! Camera system for 3D scene viewing.
//!
//! Provides an orbital camera with spherical-coordinate state, gesture
//! sensitivity factors, and automatic framing from scene bounds.

/// Spherical-coordinate orbit controller.
pub mod controller;
/// Core camera struct and view/projection matrices.
pub mod core;
/// Scene-bounds-driven framing of the controller.
pub mod framing;
