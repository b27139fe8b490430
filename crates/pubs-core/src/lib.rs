//! Publication search, filter and sort engine.
//!
//! [`FilterEngine`] is the only stateful type. The free functions in
//! [`matching`] and [`ordering`] are the pure pieces it composes, and
//! [`ProjectionSink`] is the seam to whatever renders the result.

pub mod engine;
pub mod matching;
pub mod ordering;
pub mod projection;
pub mod sink;

pub use engine::FilterEngine;
pub use matching::{group_admitted, is_visible, matches_filter, matches_search};
pub use ordering::display_order;
pub use projection::{GroupProjection, Projection, result_message};
pub use sink::{ProjectionSink, RecordingSink};
