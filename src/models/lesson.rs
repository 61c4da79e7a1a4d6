use serde::{Deserialize, Serialize};

use crate::errors::{AppError, Result};

/// One row of the question table, resolved at load time.
///
/// Optional columns absent from the source file, or blank in a given row,
/// are `None`; downstream code never re-checks column presence.
#[derive(Debug, Clone)]
pub struct LessonRecord {
    pub sub_lesson: String,
    pub revised_question: Option<String>,
    pub sample_question: Option<String>,
    pub templates: Option<String>,
}

impl LessonRecord {
    /// Selects the question text source: the revised text when it is
    /// non-blank, otherwise the sample text.
    pub fn question_text(&self) -> Result<&str> {
        non_blank(self.revised_question.as_deref())
            .or_else(|| non_blank(self.sample_question.as_deref()))
            .ok_or(AppError::NoQuestionText)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

/// Request to look up question text for a sub-lesson
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub sub_lesson: String,
    pub template: Option<String>,
}

/// Question lookup response
///
/// Field names follow the established wire format of the question API.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    #[serde(rename = "Sub-lesson")]
    pub sub_lesson: String,
    #[serde(rename = "Template")]
    pub template: String,
    #[serde(rename = "Question")]
    pub question: String,
}
