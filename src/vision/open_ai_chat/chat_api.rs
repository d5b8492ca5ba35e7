use base64::{Engine, engine::general_purpose};
use color_eyre::{Result, eyre::eyre};
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{MAX_DESCRIPTION_TOKENS, openai::OpenAIApiError};

/// Sends the image to the chat completions endpoint as a base64 data URL and
/// returns the model's description.
pub async fn describe(
    model: &str,
    prompt: &str,
    image: &[u8],
    api_key: &str,
    client: &Client,
) -> Result<String> {
    let encoded = general_purpose::STANDARD.encode(image);
    let body = ChatRequest {
        model,
        messages: vec![ChatMessage {
            role: "user",
            content: vec![
                ContentPart::Text {
                    text: prompt.to_string(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: format!("data:image/jpeg;base64,{encoded}"),
                    },
                },
            ],
        }],
        max_tokens: MAX_DESCRIPTION_TOKENS,
    };

    let resp = client
        .post("https://api.openai.com/v1/chat/completions")
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await?;

    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(OpenAIApiError::from_status(status, &text).into());
    }

    let parsed: ChatResponse = serde_json::from_str(&text)?;
    if let Some(usage) = &parsed.usage {
        debug!(
            "Description used {} prompt tokens, {} completion tokens",
            usage.prompt_tokens, usage.completion_tokens
        );
    }

    first_content(parsed).ok_or_else(|| eyre!("Chat response contained no description:\n{text}"))
}

fn first_content(resp: ChatResponse) -> Option<String> {
    resp.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
}

//
// ===== OpenAI wire types =====
//

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: Vec<ContentPart>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: usize,
    completion_tokens: usize,
}
