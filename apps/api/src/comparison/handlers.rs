//! Axum route handlers for the Comparison API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::comparison::generator::compare_shipping_costs;
use crate::comparison::prompts::DEFAULT_NUM_EXAMPLES;
use crate::errors::AppError;
use crate::state::AppState;

/// Inbound comparison request. Carrier names and the example count are passed
/// through unchecked; the count is advisory to the model only.
#[derive(Debug, Deserialize)]
pub struct ComparisonRequest {
    pub carriers: Vec<String>,
    #[serde(default = "default_num_examples")]
    pub num_examples: i64,
}

fn default_num_examples() -> i64 {
    DEFAULT_NUM_EXAMPLES
}

/// POST /shipping-cost-comparison/
///
/// Returns the completion service's JSON verbatim as the response body.
/// Body decoding failures are rejected with 422 before any outbound call.
pub async fn handle_shipping_cost_comparison(
    State(state): State<AppState>,
    payload: Result<Json<ComparisonRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::UnprocessableEntity(e.body_text()))?;

    let result =
        compare_shipping_costs(state.llm.as_ref(), &request.carriers, request.num_examples)
            .await?;

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_examples_defaults_to_five() {
        let request: ComparisonRequest =
            serde_json::from_str(r#"{"carriers": ["fedex", "ups"]}"#).unwrap();
        assert_eq!(request.num_examples, 5);
        assert_eq!(request.carriers, vec!["fedex", "ups"]);
    }

    #[test]
    fn test_carriers_must_be_strings() {
        let result = serde_json::from_str::<ComparisonRequest>(r#"{"carriers": [1, 2]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_num_examples_must_be_integer() {
        let result = serde_json::from_str::<ComparisonRequest>(
            r#"{"carriers": ["fedex"], "num_examples": "many"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unbounded_num_examples_are_accepted() {
        let request: ComparisonRequest =
            serde_json::from_str(r#"{"carriers": [], "num_examples": -3}"#).unwrap();
        assert_eq!(request.num_examples, -3);
        assert!(request.carriers.is_empty());
    }
}
