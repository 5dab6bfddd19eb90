pub mod color;
pub mod event;
pub mod marker;

pub use color::ColorCategory;
pub use event::{EventProperties, EventRecord, FeedDocument, Geometry};
pub use marker::{FILL_OPACITY, StyledMarker};
