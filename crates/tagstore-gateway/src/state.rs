use std::sync::Arc;

use tagstore_core::TagQuery;

#[derive(Clone)]
pub struct AppState {
    query: Arc<dyn TagQuery>,
}

impl AppState {
    pub fn new(query: Arc<dyn TagQuery>) -> Self {
        Self { query }
    }

    pub fn query(&self) -> &dyn TagQuery {
        self.query.as_ref()
    }
}
