use std::pin::Pin;

use base64::{Engine, engine::general_purpose};
use color_eyre::{
    Result,
    eyre::{bail, eyre},
};
use log::debug;

use crate::image_model::{ImageModel, Model};

pub mod images_api;

#[derive(Clone)]
pub struct DallE {
    model: Model,
    api_key: String,
    client: reqwest::Client,
}

impl DallE {
    pub fn new(model: Model, api_key: String) -> Self {
        Self {
            model,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

impl ImageModel for DallE {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>> {
        Box::pin(async move {
            let response =
                images_api::generate(self.model, prompt, &self.api_key, &self.client).await?;
            debug!("Generation response: {response:#?}");

            let image = response
                .data
                .into_iter()
                .next()
                .ok_or_else(|| eyre!("Generation response contained no image"))?;

            if let Some(revised) = &image.revised_prompt {
                debug!("Revised prompt: {revised}");
            }

            match (image.url, image.b64_json) {
                (Some(url), _) => images_api::fetch(&url, &self.client).await,
                (None, Some(b64)) => Ok(general_purpose::STANDARD.decode(b64.trim())?),
                (None, None) => bail!("Generated image had neither url nor b64_json"),
            }
        })
    }
}
