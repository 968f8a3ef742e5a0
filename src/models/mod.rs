pub mod course;

pub use course::{Course, CourseRequest, CourseTable};
