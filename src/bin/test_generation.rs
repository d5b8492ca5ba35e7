use clap::Parser;
use color_eyre::Result;
use convergence::image_model::{ImageModel, Model};

#[derive(clap::Parser)]
struct Arg {
    model: Model,
    key: String,
    prompt: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let Arg { model, key, prompt } = Arg::parse();
    let imgmod = model.make(key);

    let image = imgmod.generate(&prompt).await?;
    std::fs::write("output.jpeg", &image)?;
    println!("Saved image, {} bytes", image.len());

    Ok(())
}
