use std::time::Instant;

use color_eyre::{Result, eyre::eyre};
use log::info;

use crate::{ImgModBox, VisionBox, gallery::Gallery, image_model::ImageModel, vision::VisionModel};

/// Immutable for the duration of a run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub generate_prompt: String,
    pub describe_prompt: String,
    pub iterations: u32,
}

pub struct Driver {
    imgmod: ImgModBox,
    vision: VisionBox,
    gallery: Gallery,
}

impl Driver {
    pub fn new(imgmod: ImgModBox, vision: VisionBox, gallery: Gallery) -> Self {
        Self {
            imgmod,
            vision,
            gallery,
        }
    }

    /// Runs exactly `iterations` generate-save-describe cycles, feeding each
    /// description back as the next generation prompt. The first cycle uses
    /// the configured prompt; a fresh folder starts at index 1, otherwise the
    /// run continues after the highest existing index. Any failure aborts the
    /// run; images saved by completed steps stay on disk for a later resume.
    pub async fn run(&self, cfg: &RunConfig) -> Result<()> {
        let start = self.gallery.next_index();
        let end = start
            .checked_add(cfg.iterations)
            .ok_or_else(|| eyre!("{} iterations starting at index {start} exceed the index range", cfg.iterations))?;
        let mut prompt = cfg.generate_prompt.clone();

        for index in start..end {
            let t0 = Instant::now();

            let image = self.imgmod.generate(&prompt).await?;
            let path = self.gallery.save(index, &image)?;
            let description = self.vision.describe(&image, &cfg.describe_prompt).await?;

            info!(
                "Iteration {index:03} took {:.3} s, saved {}",
                t0.elapsed().as_secs_f64(),
                path.display()
            );
            info!("{description}");

            prompt = description;
        }

        Ok(())
    }
}
