// LLM prompt constants and rendering for the shipping cost comparison.

/// System prompt framing the model as a shipping-data generator.
pub const COMPARISON_SYSTEM: &str =
    "You are a helpful assistant that generates realistic shipping carrier data.";

/// Number of scenarios requested when the caller does not say.
pub const DEFAULT_NUM_EXAMPLES: i64 = 5;

/// Comparison prompt template.
/// Replace: {carriers}, {num_examples}, {example_record}
const COMPARISON_PROMPT_TEMPLATE: &str = r#"Generate shipping cost comparison data for the following carriers: {carriers}.
Create {num_examples} realistic shipping scenarios with varying weights, dimensions, and locations.
For each scenario, provide the shipping cost for each carrier, and calculate the average savings and percent savings when using the cheapest option.

Return the data as a JSON object with this structure containing 4 different zones:
{
  "data": [
    {example_record},
    ...
  ]
}"#;

/// Sample costs used to fill the example record, cycled per carrier.
const SAMPLE_COSTS: [f64; 4] = [12.04, 6.99, 6.77, 5.85];

/// Renders the user prompt for a comparison request.
///
/// Carrier names are interpolated verbatim into the carrier list. An empty
/// carrier list is accepted and yields a prompt with an empty list.
pub fn build_comparison_prompt(carriers: &[String], num_examples: i64) -> String {
    COMPARISON_PROMPT_TEMPLATE
        .replace("{carriers}", &carriers.join(", "))
        .replace("{num_examples}", &num_examples.to_string())
        .replace("{example_record}", &example_record(carriers))
}

/// One zone record with a cost field per carrier, in request order.
/// Keys go through the JSON encoder so the example itself stays well-formed.
fn example_record(carriers: &[String]) -> String {
    let mut fields = vec![r#""Distance": "Zone 1""#.to_string()];
    for (carrier, cost) in carriers.iter().zip(SAMPLE_COSTS.iter().cycle()) {
        let key = serde_json::Value::String(carrier.clone());
        fields.push(format!("{key}: {cost:.2}"));
    }
    format!("{{{}}}", fields.join(", "))
}
