//! Plumbing shared by the image generation and description clients, which
//! both talk to the OpenAI API.

mod error;
pub use error::OpenAIApiError;
