use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

/// Format d'horodatage des fichiers auto-sauvegardés.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Build `<output_dir>/<image-stem>_<YYYY-MM-DD_HH-MM-SS>.txt`.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use px_export::naming::auto_save_path;
/// use std::path::{Path, PathBuf};
///
/// let at = Utc.with_ymd_and_hms(2026, 2, 25, 7, 26, 40).unwrap();
/// let path = auto_save_path(Path::new("received"), Path::new("photos/IMG_8157.jpg"), &at);
/// assert_eq!(path, PathBuf::from("received/IMG_8157_2026-02-25_07-26-40.txt"));
/// ```
#[must_use]
pub fn auto_save_path<Tz: TimeZone>(output_dir: &Path, image: &Path, at: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    let stem = image
        .file_stem()
        .map_or_else(|| "image".into(), |s| s.to_string_lossy());
    output_dir.join(format!("{stem}_{}.txt", at.format(TIMESTAMP_FORMAT)))
}
