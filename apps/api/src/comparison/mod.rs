// Shipping cost comparison: prompt building, the completion pipeline, and its HTTP handler.
// All LLM calls go through llm_client; never call OpenAI directly here.

pub mod generator;
pub mod handlers;
pub mod prompts;
