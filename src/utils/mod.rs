pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::format_magnitude;
pub use time::format_local_timestamp;
