//! Data models for publication lists.
//!
//! Records stay as JSON objects; fields are looked up by [`RecordKey`] so a
//! missing key and a present key are always distinguishable.

mod enums;
mod record;

pub use enums::{InitialStyle, RecordKey};
pub use record::PublicationRecord;
