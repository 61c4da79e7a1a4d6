pub mod lesson;

pub use lesson::{LessonRecord, QueryRequest, QuestionResponse};
