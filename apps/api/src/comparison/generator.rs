//! Comparison pipeline: prompt → completion → decoded JSON, returned verbatim.

use serde_json::Value;
use tracing::{info, warn};

use crate::comparison::prompts::{build_comparison_prompt, COMPARISON_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::CompletionClient;

/// Asks the completion service for synthetic cost data covering `carriers`.
/// The model's JSON is returned as-is; nothing is retried or defaulted.
pub async fn compare_shipping_costs(
    llm: &dyn CompletionClient,
    carriers: &[String],
    num_examples: i64,
) -> Result<Value, AppError> {
    info!(
        "Generating shipping cost comparison: carriers={}, num_examples={}",
        carriers.len(),
        num_examples
    );

    let prompt = build_comparison_prompt(carriers, num_examples);
    let result = llm.complete_json(COMPARISON_SYSTEM, &prompt).await?;

    for issue in shape_issues(&result) {
        warn!("Comparison result deviates from expected shape: {issue}");
    }

    Ok(result)
}

/// Lists the ways `value` departs from `{"data": [{"Distance": ..., ...}, ...]}`.
/// Extra fields are never reported.
pub fn shape_issues(value: &Value) -> Vec<String> {
    let Some(object) = value.as_object() else {
        return vec!["top level is not a JSON object".to_string()];
    };
    let Some(data) = object.get("data") else {
        return vec!["missing `data` key".to_string()];
    };
    let Some(records) = data.as_array() else {
        return vec!["`data` is not an array".to_string()];
    };

    records
        .iter()
        .enumerate()
        .filter_map(|(i, record)| match record.as_object() {
            None => Some(format!("data[{i}] is not an object")),
            Some(fields) if !fields.contains_key("Distance") => {
                Some(format!("data[{i}] has no `Distance` label"))
            }
            Some(_) => None,
        })
        .collect()
}
