use color_eyre::{Result, eyre::ensure};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{IMAGE_SIZE, image_model::Model, openai::OpenAIApiError};

#[derive(Debug, Serialize)]
pub struct GenerationRequest<'a> {
    pub model: &'static str,
    pub prompt: &'a str,
    pub size: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<&'static str>,
    pub n: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    pub data: Vec<GeneratedImage>,
}

/// One generated image, delivered either as a short-lived URL or inline.
#[derive(Debug, Deserialize)]
pub struct GeneratedImage {
    pub url: Option<String>,
    pub b64_json: Option<String>,
    pub revised_prompt: Option<String>,
}

/// Requests a single image for the prompt and returns the parsed response.
pub async fn generate(
    model: Model,
    prompt: &str,
    api_key: &str,
    client: &Client,
) -> Result<GenerationResponse> {
    let payload = GenerationRequest {
        model: model.api_name(),
        prompt,
        size: IMAGE_SIZE,
        quality: model.quality(),
        n: 1,
    };

    let resp = client
        .post("https://api.openai.com/v1/images/generations")
        .bearer_auth(api_key)
        .json(&payload)
        .send()
        .await?;

    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(OpenAIApiError::from_status(status, &text).into());
    }

    Ok(serde_json::from_str(&text)?)
}

/// Downloads the generated image from the URL the API returned.
pub async fn fetch(url: &str, client: &Client) -> Result<Vec<u8>> {
    let resp = client.get(url).send().await?;
    ensure!(
        resp.status().is_success(),
        "Failed to download image from {url}: {}",
        resp.status()
    );
    Ok(resp.bytes().await?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn request_serialization_dalle3() {
        let payload = GenerationRequest {
            model: Model::DallE3.api_name(),
            prompt: "A red balloon",
            size: IMAGE_SIZE,
            quality: Model::DallE3.quality(),
            n: 1,
        };

        let expect = expect![[
            r#"{"model":"dall-e-3","prompt":"A red balloon","size":"1024x1024","quality":"standard","n":1}"#
        ]];
        expect.assert_eq(&serde_json::to_string(&payload).unwrap());
    }

    #[test]
    fn request_serialization_dalle2_has_no_quality() {
        let payload = GenerationRequest {
            model: Model::DallE2.api_name(),
            prompt: "A red balloon",
            size: IMAGE_SIZE,
            quality: Model::DallE2.quality(),
            n: 1,
        };

        let expect = expect![[
            r#"{"model":"dall-e-2","prompt":"A red balloon","size":"1024x1024","n":1}"#
        ]];
        expect.assert_eq(&serde_json::to_string(&payload).unwrap());
    }

    #[test]
    fn response_deserialization() {
        let body = r#"{
            "created": 1700000000,
            "data": [{"url": "https://example.com/img", "revised_prompt": "A red balloon at dusk"}]
        }"#;
        let resp: GenerationResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].url.as_deref(), Some("https://example.com/img"));
        assert!(resp.data[0].b64_json.is_none());
    }
}
