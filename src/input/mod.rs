//! Input handling: platform-agnostic gesture events, the mapper that
//! converts them into camera mutations, and thin per-platform adapters.

/// Platform-agnostic gesture events.
pub mod event;
/// Converts gesture events into camera mutations.
pub mod mapper;
/// Adapters translating platform window events into gestures.
#[cfg(feature = "viewer")]
pub mod platform;

pub use event::GestureEvent;
pub use mapper::InputMapper;
#[cfg(feature = "viewer")]
pub use platform::WinitGestureAdapter;
