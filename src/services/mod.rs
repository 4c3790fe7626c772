pub mod homework;
pub mod notification;
pub mod practicum;

pub use homework::{format_status, validate_response, NO_UPDATES_MESSAGE};
pub use notification::{Notifier, TelegramNotifier};
pub use practicum::{HomeworkApi, PracticumClient};
