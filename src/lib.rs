use crate::{image_model::ImageModel, vision::VisionModel};

pub mod cli;
pub mod driver;
pub mod gallery;
pub mod image_model;
pub mod openai;
pub mod vision;

pub type ImgModBox = Box<dyn ImageModel + Send>;
pub type VisionBox = Box<dyn VisionModel + Send>;

/// Upper bound on the length of a generated description, which becomes the
/// next generation prompt.
pub const MAX_DESCRIPTION_TOKENS: usize = 1234;
pub const IMAGE_SIZE: &str = "1024x1024";
