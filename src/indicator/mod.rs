//! Scroll-synchronized zigzag indicator.
//!
//! Modules:
//! - `path`     : The fixed zigzag polyline and its nominal arclength.
//! - `geometry` : Container readings, derived ratios and thumb dash parameters.
//! - `zigzag`   : The indicator itself: subscriptions, state, SVG overlay.
//!
//! The indicator is a visual hint only; it never scrolls the container.

pub mod geometry;
pub mod path;
pub mod zigzag;

pub use geometry::{ScrollGeometry, ThumbStroke};
pub use path::{ZigzagParams, ZigzagPath};
pub use zigzag::{EventSource, IndicatorState, ScrollContainer, Subscription, ZigzagIndicator};
