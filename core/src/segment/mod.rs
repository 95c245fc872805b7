pub mod types;
pub mod sequence;
pub mod store;
pub mod hierarchy;
pub mod render_order;

#[cfg(test)]
mod tests_render_order;

pub use hierarchy::{ancestors, build_hierarchy, find_smallest_container};
pub use render_order::{compose_render_order, preview_render_order};
pub use sequence::{number_to_code, SegmentSequence, SequenceEntry};
pub use store::SegmentStore;
pub use types::{is_contained, ParseSegmentIdError, Segment, SegmentId};
