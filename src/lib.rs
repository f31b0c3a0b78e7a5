// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbit-camera controller with automatic scene framing.
//!
//! Orbview drives a perspective camera around whatever content a scene
//! holds, with no dedicated navigation UI: drag orbits, scroll pans, pinch
//! dollies, and the view frames itself whenever scene content changes. The
//! crate owns no window and no renderer: an external renderer consumes the
//! derived eye position and view matrix, and a platform layer feeds gesture
//! deltas in.
//!
//! # Key entry points
//!
//! - [`view::OrbitView`] - scene + camera composition root
//! - [`camera::controller::CameraController`] - spherical orbit state
//! - [`scene::Scene`] - anchor graph with exclusion-aware bounds
//! - [`options::Options`] - runtime configuration (camera, display)
//!
//! # Architecture
//!
//! Gestures flow through [`input::InputMapper`] into the controller, which
//! derives the eye position the renderer consumes. Scene mutations bump a
//! generation counter; [`view::OrbitView::sync_framing`] notices, unions
//! the visual bounds of every non-excluded anchor, and re-frames the
//! camera so the whole scene stays visible with interaction speed
//! proportional to scene size. The camera's own rig anchor is excluded
//! from that union so the camera never frames itself.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod view;
