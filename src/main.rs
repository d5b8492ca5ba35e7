use clap::Parser;
use color_eyre::{
    Result,
    eyre::{WrapErr, ensure},
};
use convergence::{
    cli::Cli,
    driver::{Driver, RunConfig},
    gallery::Gallery,
    vision::OpenAIChat,
};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    color_eyre::install()?;
    let cli = Cli::parse();

    let api_key = std::fs::read_to_string(&cli.api)
        .wrap_err_with(|| format!("reading api key file {}", cli.api.display()))?
        .trim()
        .to_string();
    ensure!(
        !api_key.is_empty(),
        "api key file {} is empty",
        cli.api.display()
    );
    ensure!(
        !cli.generate_prompt.trim().is_empty(),
        "the generation prompt must not be empty"
    );

    info!(
        "Generating with {}, describing with {}",
        cli.image_model, cli.vision_model
    );
    let gallery = Gallery::open(&cli.folder)?;
    let imgmod = cli.image_model.make(api_key.clone());
    let vision = Box::new(OpenAIChat::new(api_key, cli.vision_model));

    let driver = Driver::new(imgmod, vision, gallery);
    driver
        .run(&RunConfig {
            generate_prompt: cli.generate_prompt,
            describe_prompt: cli.describe_prompt,
            iterations: cli.number,
        })
        .await
}
