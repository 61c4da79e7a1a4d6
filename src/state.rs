use std::sync::Arc;

use crate::{config::Config, dataset::QuestionTable};

/// Application state shared across all handlers
///
/// The question table is loaded once at startup and only ever read, so
/// handlers share it with no coordination.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<QuestionTable>,
    pub config: Config,
}

impl AppState {
    pub fn new(table: QuestionTable, config: Config) -> Self {
        Self {
            table: Arc::new(table),
            config,
        }
    }
}
