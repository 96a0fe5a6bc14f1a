//! Command-line interface for batch generation of mandala images

use crate::algorithm::compositor::{Compositor, CompositorConfig, image_rng};
use crate::algorithm::observer::TracingObserver;
use crate::algorithm::palette::{Palette, PaletteKind};
use crate::io::configuration::{
    DEFAULT_COUNT, DEFAULT_HEIGHT, DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_DIR, DEFAULT_WIDTH,
};
use crate::io::error::{Result, file_system_error};
use crate::io::image::{export_png, image_path};
use crate::io::progress::ProgressManager;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "alpona")]
#[command(
    version,
    about = "Generate alpona mandala images from concentric motif rings",
    disable_version_flag = true
)]
/// Command-line arguments for the image generator
pub struct Cli {
    /// Width of each image in pixels
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Height of each image in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Directory receiving the generated images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Number of images to generate
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Base seed; image k of the batch uses seed + k
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Motif palette to draw rings from
    #[arg(short, long, value_enum, default_value_t = PaletteKind::Extended)]
    pub palette: PaletteKind,

    /// Number images from zero and replace existing files
    #[arg(long)]
    pub overwrite: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log filter used when `RUST_LOG` is unset
    #[arg(short, long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Image configuration described by the arguments
    pub fn compositor_config(&self) -> CompositorConfig {
        CompositorConfig::new(self.width, self.height).with_palette(Palette::from_kind(self.palette))
    }

    /// Seed of the image at `offset` within the batch
    pub const fn image_seed(&self, offset: usize) -> Option<u64> {
        match self.seed {
            Some(seed) => Some(seed.wrapping_add(offset as u64)),
            None => None,
        }
    }
}

/// Orchestrates generation of a batch of images with progress tracking
pub struct BatchGenerator {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchGenerator {
    /// Create a batch generator with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every image of the batch and return the written paths
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image dimensions are invalid
    /// - The output directory cannot be created or scanned
    /// - An image cannot be written
    pub fn run(&mut self) -> Result<Vec<PathBuf>> {
        let compositor = Compositor::new(self.cli.compositor_config())?;

        if self.cli.count == 0 {
            return Ok(Vec::new());
        }

        let output_dir = self.cli.output.clone();
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| file_system_error(&output_dir, "create directory", e))?;

        let ids = self.allocate_ids(&output_dir)?;
        tracing::info!(
            output = %output_dir.display(),
            count = ids.len(),
            width = self.cli.width,
            height = self.cli.height,
            palette = ?self.cli.palette,
            "generating images"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(ids.len());
        }

        let mut written = Vec::with_capacity(ids.len());
        for (offset, id) in ids.into_iter().enumerate() {
            let path = image_path(&output_dir, id);
            if let Some(ref pm) = self.progress_manager {
                pm.start_image(&path);
            }

            let mut rng = image_rng(self.cli.image_seed(offset));
            let mut observer = (TracingObserver, self.progress_manager.as_mut());
            let surface = compositor.render(&mut rng, &mut observer)?;
            export_png(&surface, &path)?;
            tracing::info!(id, path = %path.display(), "image saved");

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_image();
            }
            written.push(path);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        tracing::info!(
            count = written.len(),
            output = %output_dir.display(),
            "generation complete"
        );

        Ok(written)
    }

    /// Pick one unique id per image of the batch
    ///
    /// Without `--overwrite`, ids whose file already exists are skipped so
    /// earlier output is never replaced.
    fn allocate_ids(&self, output_dir: &Path) -> Result<Vec<u64>> {
        let count = self.cli.count;
        if self.cli.overwrite {
            return Ok((0..count as u64).collect());
        }

        let mut ids = Vec::with_capacity(count);
        let mut candidate = 0_u64;
        while ids.len() < count {
            let path = image_path(output_dir, candidate);
            let taken = path
                .try_exists()
                .map_err(|e| file_system_error(&path, "check existing output", e))?;
            if taken {
                tracing::debug!(path = %path.display(), "skipping existing image id");
            } else {
                ids.push(candidate);
            }
            candidate += 1;
        }

        Ok(ids)
    }
}
