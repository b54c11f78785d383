pub mod gemini;
pub mod prompt;
pub mod provider;
pub mod relay;
