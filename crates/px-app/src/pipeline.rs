use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use px_core::CoreError;
use px_core::config::RenderConfig;
use px_core::frame::RenderedArt;
use px_core::traits::ImageDecoder;
use px_export::naming::auto_save_path;

/// Outcome of the two file saves. Each one fails independently.
#[derive(Debug)]
pub struct SaveReport {
    /// Mandatory auto-save into the output directory.
    pub auto_save: Result<PathBuf, CoreError>,
    /// Optional `--output` save. `None` when not requested.
    pub user_save: Option<Result<PathBuf, CoreError>>,
}

impl SaveReport {
    /// Errors of the failed saves, auto-save first.
    pub fn failures(&self) -> impl Iterator<Item = &CoreError> {
        self.auto_save
            .as_ref()
            .err()
            .into_iter()
            .chain(self.user_save.as_ref().and_then(|r| r.as_ref().err()))
    }
}

/// Orchestrateur : décodage → resize → gris → rendu → terminal → fichiers.
pub struct Pipeline<D> {
    decoder: D,
    config: RenderConfig,
}

impl<D: ImageDecoder> Pipeline<D> {
    /// Create a pipeline around a decoder and a resolved configuration.
    pub fn new(decoder: D, config: RenderConfig) -> Self {
        Self { decoder, config }
    }

    /// Convert `image` into text art.
    ///
    /// The palette is validated before the decoder is touched.
    ///
    /// # Errors
    /// Invalid configuration, missing file, decode or resize failure.
    pub fn render(&self, image: &Path) -> Result<RenderedArt, CoreError> {
        let palette = self.config.validate()?;

        log::info!("Loading image: {}", image.display());
        let source = self.decoder.decode(image)?;

        log::info!("Resizing to width={} characters", self.config.width);
        // L'alpha sert au rééchantillonnage, puis on repasse en RGB
        let resized = px_source::resize_to_columns(&source, self.config.width)?.to_rgb();
        drop(source);

        let gray = px_ascii::to_gray(&resized);
        let art = if self.config.color_enabled {
            log::info!("Generating colored ASCII art");
            px_ascii::render_colored(&resized, &gray, &palette)
        } else {
            log::info!("Generating ASCII art");
            px_ascii::render(&gray, &palette)
        };
        Ok(art)
    }

    /// Full run: render, print to `out`, auto-save, then the optional user save.
    ///
    /// Save confirmations are written to `out` after the art. Save failures do
    /// not abort the run, they are returned in the [`SaveReport`].
    ///
    /// # Errors
    /// Any fatal error from [`Pipeline::render`], or a failed write to `out`.
    pub fn run(
        &self,
        image: &Path,
        user_output: Option<&Path>,
        out: &mut impl Write,
    ) -> anyhow::Result<SaveReport> {
        let art = self.render(image)?;

        px_export::to_terminal(&art, out).context("cannot write to standard output")?;

        let auto_save = self.auto_save(&art, image);
        report_save(&auto_save, out);

        let user_save = user_output.map(|path| {
            let result = px_export::to_file(&art, path, true).map(|()| path.to_path_buf());
            report_save(&result, out);
            result
        });

        Ok(SaveReport {
            auto_save,
            user_save,
        })
    }

    fn auto_save(&self, art: &RenderedArt, image: &Path) -> Result<PathBuf, CoreError> {
        let dir = &self.config.output_dir;
        std::fs::create_dir_all(dir).map_err(|source| CoreError::Write {
            path: dir.clone(),
            source,
        })?;
        let path = auto_save_path(dir, image, &Local::now());
        px_export::to_file(art, &path, true)?;
        Ok(path)
    }
}

/// Confirm a successful save on `out`. Failures are left to the caller,
/// which reports them once from the [`SaveReport`].
fn report_save(result: &Result<PathBuf, CoreError>, out: &mut impl Write) {
    match result {
        Ok(path) => {
            // stdout fermé : l'art est déjà sorti, rien d'autre à signaler
            let _ = writeln!(out, "\nASCII art saved to: {}", path.display());
        }
        Err(e) => log::debug!("save failed: {e}"),
    }
}
