use axum::{extract::State, Json};

use crate::{
    errors::Result,
    extract::extract_block,
    models::{QueryRequest, QuestionResponse},
    state::AppState,
};

/// Look up question text for a sub-lesson, optionally narrowed to one
/// template's section
///
/// With a template, the matching block is sliced out of the question
/// text; without one, the full text is returned together with the row's
/// raw template list.
pub async fn query_question(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<QuestionResponse>> {
    let record = state.table.find(&payload.sub_lesson)?;
    let text = record.question_text()?;

    // An empty template string means "no template requested"
    let requested = payload.template.as_deref().filter(|t| !t.is_empty());

    let response = match requested {
        Some(template) => {
            let question = extract_block(text, template)?;
            tracing::debug!(
                sub_lesson = %payload.sub_lesson,
                template = %template,
                "Extracted question block"
            );
            QuestionResponse {
                sub_lesson: payload.sub_lesson.clone(),
                template: template.to_string(),
                question,
            }
        }
        None => QuestionResponse {
            sub_lesson: payload.sub_lesson.clone(),
            template: record.templates.clone().unwrap_or_default(),
            question: text.to_string(),
        },
    };

    Ok(Json(response))
}
