use std::pin::Pin;

use color_eyre::Result;

pub trait VisionModel {
    fn describe<'a>(
        &'a self,
        image: &'a [u8],
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}

mod open_ai_chat;
pub use open_ai_chat::OpenAIChat;
