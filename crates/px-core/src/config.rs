use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset::{CHARSET_DEFAULT, CharPalette};
use crate::error::CoreError;

/// Largeur de sortie par défaut, en caractères.
pub const DEFAULT_WIDTH: u32 = 100;

/// Dossier d'auto-sauvegarde par défaut, relatif au répertoire courant.
pub const DEFAULT_OUTPUT_DIR: &str = "received";

/// Configuration complète d'une conversion.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use px_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.width, 100);
/// assert_eq!(config.charset, "@%#*+=-:. ");
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RenderConfig {
    /// Nombre de colonnes de caractères.
    pub width: u32,
    /// Palette du plus dense au plus clair.
    pub charset: String,
    /// Activer la couleur truecolor.
    pub color_enabled: bool,
    /// Dossier où chaque rendu est auto-sauvegardé.
    pub output_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            charset: CHARSET_DEFAULT.to_string(),
            color_enabled: false,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl RenderConfig {
    /// Check the configuration and build the palette.
    ///
    /// # Errors
    /// [`CoreError::Config`] if the charset has fewer than 2 characters or
    /// the width is zero.
    ///
    /// # Example
    /// ```
    /// use px_core::config::RenderConfig;
    /// let config = RenderConfig { charset: "@".into(), ..RenderConfig::default() };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<CharPalette, CoreError> {
        let palette = CharPalette::new(&self.charset)?;
        if self.width == 0 {
            return Err(CoreError::Config("--width must be at least 1".to_string()));
        }
        Ok(palette)
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderSection {
    width: Option<u32>,
    charset: Option<String>,
    color_enabled: Option<bool>,
    output_dir: Option<PathBuf>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// Validation is left to [`RenderConfig::validate`] so CLI overrides can
/// still fix a bad value from the file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use px_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("invalid TOML in {}", path.display()))?;

    let mut config = RenderConfig::default();

    if let Some(r) = file.render {
        if let Some(v) = r.width {
            config.width = v;
        }
        if let Some(v) = r.charset {
            config.charset = v;
        }
        if let Some(v) = r.color_enabled {
            config.color_enabled = v;
        }
        if let Some(v) = r.output_dir {
            config.output_dir = v;
        }
    }

    log::debug!("config loaded from {}: {config:?}", path.display());
    Ok(config)
}
