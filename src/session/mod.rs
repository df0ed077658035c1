mod forms;
mod manager;
mod notice;

pub use forms::{ContactForm, NutritionistRequest};
pub use manager::{Session, Step, Toggled};
pub use notice::{Notice, NoticeLevel};
