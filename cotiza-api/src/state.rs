use cotiza_core::QuoteEngine;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<QuoteEngine>,
}

impl AppState {
    pub fn new(engine: QuoteEngine) -> Self {
        Self { engine: Arc::new(engine) }
    }
}
