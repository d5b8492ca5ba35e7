use std::path::PathBuf;

use crate::image_model::Model;

/// Generate an image from a prompt, describe it, and feed the description
/// back as the next prompt, for a fixed number of iterations.
#[derive(Debug, clap::Parser)]
pub struct Cli {
    /// File containing the OpenAI API key
    #[arg(short, long)]
    pub api: PathBuf,

    /// Initial prompt for the first generated image
    #[arg(short, long)]
    pub generate_prompt: String,

    /// Folder where the images are stored
    #[arg(short, long)]
    pub folder: PathBuf,

    /// Prompt used to describe each generated image
    #[arg(short, long, default_value = "Describe the image in all details.")]
    pub describe_prompt: String,

    /// Number of iterations
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub number: u32,

    /// Model used for image generation
    #[arg(long, value_enum, default_value_t)]
    pub image_model: Model,

    /// Chat model used for image description
    #[arg(long, default_value = "gpt-4o")]
    pub vision_model: String,
}
