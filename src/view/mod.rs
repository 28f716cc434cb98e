//! Camera animation and the markers it leaves behind.

mod easing;
mod frame;
mod interpolate;
mod markers;
mod transition;

pub use easing::Easing;
pub use frame::{FrameRequests, GlobeRenderer};
pub use interpolate::{LongitudePath, RotationInterpolator};
pub use markers::{render_markers, MarkerLayer};
pub use transition::{TickOutcome, TransitionConfig, ViewTransition, DEFAULT_DURATION};
