//! LLM module for transcript-analyzer
//!
//! Turns a validated transcript into raw analysis text using Gemini, either
//! through the Gemini API or through Vertex AI.

mod client;
mod gemini;
mod prompts;
mod vertex;

pub use client::{
    build_provider, GenerationRequest, InvocationError, LlmProvider, MAX_OUTPUT_TOKENS,
    TEMPERATURE,
};
pub use gemini::GeminiClient;
pub use prompts::build_analysis_prompt;
pub use vertex::VertexClient;
