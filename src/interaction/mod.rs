//! Pointer interaction
//!
//! The controller owns all mutable interaction state, including the pin
//! store. Nothing here draws; handlers return an [`Outcome`] describing what
//! to refresh.

pub mod controller;
pub mod event;
pub mod pins;

pub use controller::{InteractionController, InteractionState, Mode, Outcome};
pub use event::{PointerEvent, PointerKind, PointerSource};
pub use pins::{PinId, PinStore, PinnedAngle};
