pub mod homework;

pub use homework::{Homework, HomeworkStatus, StatusesResponse};
