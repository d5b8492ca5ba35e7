use std::pin::Pin;

use color_eyre::Result;
use reqwest::Client;

use crate::vision::VisionModel;

pub mod chat_api;

#[derive(Debug, Clone)]
pub struct OpenAIChat {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAIChat {
    pub fn new(api_key: String, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.into(),
        }
    }
}

impl VisionModel for OpenAIChat {
    fn describe<'a>(
        &'a self,
        image: &'a [u8],
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(chat_api::describe(
            &self.model,
            prompt,
            image,
            &self.api_key,
            &self.client,
        ))
    }
}
