use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use px_core::CoreError;
use px_core::frame::RenderedArt;

/// Remove every terminal escape sequence from `input`, color markers included.
///
/// # Example
/// ```
/// use px_export::sink::strip_markers;
/// assert_eq!(strip_markers("\x1b[38;2;1;2;3m@\x1b[0m#"), "@#");
/// ```
#[must_use]
pub fn strip_markers(input: &str) -> String {
    if input.contains('\u{1b}') {
        strip_ansi_escapes::strip_str(input)
    } else {
        input.to_string()
    }
}

/// Write the rows joined by `\n`, newline-terminated, markers included.
///
/// # Errors
/// Propagates any I/O error from `out`.
///
/// # Example
/// ```
/// use px_core::frame::RenderedArt;
/// use px_export::sink::to_terminal;
/// let art = RenderedArt { rows: vec!["@@".into(), "..".into()], columns: 2, colored: false };
/// let mut out = Vec::new();
/// to_terminal(&art, &mut out).unwrap();
/// assert_eq!(out, b"@@\n..\n");
/// ```
pub fn to_terminal(art: &RenderedArt, out: &mut impl Write) -> io::Result<()> {
    for row in &art.rows {
        out.write_all(row.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Save `art` as UTF-8 text, one newline-terminated line per row.
///
/// When `strip` is set every color marker is removed first, so the file
/// stays plain text whatever mode it was rendered in. Parent directories
/// are not created.
///
/// # Errors
/// [`CoreError::Write`] if the file cannot be created or written.
pub fn to_file(art: &RenderedArt, path: &Path, strip: bool) -> Result<(), CoreError> {
    let write_err = |source: io::Error| CoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    for row in &art.rows {
        let line = if strip {
            Cow::Owned(strip_markers(row))
        } else {
            Cow::Borrowed(row.as_str())
        };
        writer.write_all(line.as_bytes()).map_err(write_err)?;
        writer.write_all(b"\n").map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;
    log::debug!("{} rows written to {}", art.rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colored_art() -> RenderedArt {
        RenderedArt {
            rows: vec![
                "\x1b[38;2;0;0;0m@\x1b[0m\x1b[38;2;9;9;9m%\x1b[0m".into(),
                "\x1b[38;2;255;255;255m \x1b[0m\x1b[38;2;1;1;1m.\x1b[0m".into(),
            ],
            columns: 2,
            colored: true,
        }
    }

    #[test]
    fn strip_leaves_plain_text_untouched() {
        assert_eq!(strip_markers("@%#*+=-:. "), "@%#*+=-:. ");
        assert_eq!(strip_markers("█▓▒░"), "█▓▒░");
    }

    #[test]
    fn strip_removes_non_csi_sequences_whole() {
        // OSC window title, BEL-terminated
        assert_eq!(strip_markers("\x1b]0;title\x07@"), "@");
        assert_eq!(strip_markers("\x1b[1m\x1b[38;2;4;5;6m#\x1b[0m."), "#.");
    }

    #[test]
    fn terminal_keeps_markers() {
        let art = colored_art();
        let mut out = Vec::new();
        to_terminal(&art, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("{}\n{}\n", art.rows[0], art.rows[1]));
    }

    #[test]
    fn file_is_stripped_and_newline_terminated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.txt");
        to_file(&colored_art(), &path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "@%\n .\n");
    }

    #[test]
    fn unstripped_file_keeps_markers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.txt");
        to_file(&colored_art(), &path, false).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains('\x1b'));
    }

    #[test]
    fn unicode_palette_round_trips_as_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blocks.txt");
        let art = RenderedArt {
            rows: vec!["█▓".into(), "░ ".into()],
            columns: 2,
            colored: false,
        };
        to_file(&art, &path, true).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().collect::<Vec<_>>(), vec!["█▓", "░ "]);
    }

    #[test]
    fn missing_parent_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir").join("art.txt");
        let err = to_file(&colored_art(), &path, true).unwrap_err();
        assert!(matches!(err, CoreError::Write { .. }));
        assert!(!path.exists());
    }
}
