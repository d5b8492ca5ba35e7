use std::pin::Pin;

use color_eyre::Result;
use strum::Display;

pub mod dalle;
pub use dalle::DallE;

use crate::ImgModBox;

#[derive(Debug, Clone, Copy, Display, clap::ValueEnum, Hash, PartialEq, Eq, Default)]
pub enum Model {
    #[strum(to_string = "dall-e-2")]
    #[value(name = "dall-e-2")]
    DallE2,
    #[default]
    #[strum(to_string = "dall-e-3")]
    #[value(name = "dall-e-3")]
    DallE3,
}

impl Model {
    pub fn make(&self, key: String) -> ImgModBox {
        Box::new(DallE::new(*self, key))
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            Model::DallE2 => "dall-e-2",
            Model::DallE3 => "dall-e-3",
        }
    }

    /// dall-e-2 rejects the quality parameter, dall-e-3 expects one.
    pub fn quality(&self) -> Option<&'static str> {
        match self {
            Model::DallE2 => None,
            Model::DallE3 => Some("standard"),
        }
    }
}

pub trait ImageModel {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>>;
}
