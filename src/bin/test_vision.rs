use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use convergence::vision::{OpenAIChat, VisionModel};

#[derive(clap::Parser)]
struct Arg {
    key: String,
    image: PathBuf,

    #[arg(default_value = "Describe the image in all details.")]
    prompt: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let Arg { key, image, prompt } = Arg::parse();

    let bytes = std::fs::read(&image)?;
    let vision = OpenAIChat::new(key, "gpt-4o");
    let description = vision.describe(&bytes, &prompt).await?;
    println!("{description}");

    Ok(())
}
