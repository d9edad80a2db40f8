use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use cotiza_core::{QuoteInput, QuoteResult, QuoteView};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Raw field values from the pricing form. The numeric fields arrive as
/// whatever the user typed: JSON strings, numbers, or nothing at all.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub sku_count: Value,
    #[serde(default)]
    pub sales_volume: Value,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuoteMode {
    Standard,
    CustomQuoteRequired,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub mode: QuoteMode,
    pub rate_text: String,
    pub cost_text: String,
    pub volume_notice: Option<String>,
    pub sku_notice: Option<String>,
    pub large_catalog_notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_rate_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_surcharge: Option<f64>,
}

impl QuoteResponse {
    fn from_result(result: &QuoteResult) -> Self {
        let view = QuoteView::render(result);
        match result {
            QuoteResult::Standard(q) => Self {
                mode: QuoteMode::Standard,
                rate_text: view.rate_text,
                cost_text: view.cost_text,
                volume_notice: view.volume_notice,
                sku_notice: view.sku_notice,
                large_catalog_notice: None,
                effective_rate_percent: Some(q.display_rate_percent()),
                estimated_cost: Some(q.cost_mxn()),
                volume_discount: Some(q.volume_discount),
                sku_surcharge: Some(q.sku_surcharge),
            },
            QuoteResult::CustomQuoteRequired => Self {
                mode: QuoteMode::CustomQuoteRequired,
                rate_text: view.rate_text,
                cost_text: view.cost_text,
                volume_notice: None,
                sku_notice: None,
                large_catalog_notice: view.large_catalog_notice,
                effective_rate_percent: None,
                estimated_cost: None,
                volume_discount: None,
                sku_surcharge: None,
            },
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/v1/quote", post(create_quote))
}

async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /v1/quote
/// Compute a commission quote from the raw form fields.
async fn create_quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Json<QuoteResponse> {
    let input = QuoteInput::from_raw(&req.plan, &req.sku_count, &req.sales_volume);
    let result = state.engine.quote(&input);
    tracing::debug!(
        plan = ?input.plan,
        sku_count = input.sku_count,
        sales_volume = input.sales_volume,
        "quote computed"
    );
    Json(QuoteResponse::from_result(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use cotiza_core::{QuoteEngine, RateCard};
    use serde_json::json;
    use tower::ServiceExt;

    fn test_app() -> Router {
        crate::app(AppState::new(QuoteEngine::new(RateCard::default())))
    }

    async fn post_quote(body: Value) -> Value {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/quote")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint_is_alive() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn quote_endpoint_renders_a_standard_quote() {
        let body = post_quote(json!({
            "plan": "complete",
            "sku_count": 0,
            "sales_volume": "600000"
        }))
        .await;

        assert_eq!(body["mode"], "standard");
        assert_eq!(body["rate_text"], "8.08%");
        assert_eq!(body["cost_text"], "$48,450");
        assert_eq!(body["estimated_cost"], 48450);
        assert_eq!(body["volume_discount"], 0.15);
        assert!(body["volume_notice"].as_str().unwrap().contains("15%"));
    }

    #[tokio::test]
    async fn large_catalogs_get_the_custom_quote_copy() {
        let body = post_quote(json!({
            "plan": "starter",
            "sku_count": "201",
            "sales_volume": 1_000_000
        }))
        .await;

        assert_eq!(body["mode"], "custom_quote_required");
        assert_eq!(body["rate_text"], "Personalizado");
        assert_eq!(body["cost_text"], "Cotizar");
        assert!(body["large_catalog_notice"].is_string());
        assert!(body.get("estimated_cost").is_none());
    }

    #[tokio::test]
    async fn malformed_fields_coerce_to_zero() {
        let body = post_quote(json!({
            "plan": "invalidValue",
            "sku_count": "abc",
            "sales_volume": null
        }))
        .await;

        assert_eq!(body["mode"], "standard");
        assert_eq!(body["rate_text"], "7.00%");
        assert_eq!(body["cost_text"], "$0");
        assert_eq!(body["volume_notice"], Value::Null);
    }

    #[tokio::test]
    async fn missing_fields_default_like_an_empty_form() {
        let body = post_quote(json!({})).await;

        assert_eq!(body["mode"], "standard");
        assert_eq!(body["rate_text"], "7.00%");
        assert_eq!(body["estimated_cost"], 0);
    }
}
