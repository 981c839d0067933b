//! Data models for `CourseRegistry`

pub mod course;
pub mod registry;

pub use course::Course;
pub use registry::{parse_credits, AddOutcome, DeleteOutcome, Registry};
