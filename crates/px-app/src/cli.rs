use std::path::PathBuf;

use clap::Parser;

/// pixscii: convert an image into ASCII art.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    after_help = "Examples:\n  pixscii photo.jpg\n  pixscii photo.jpg --width 120 --output art.txt\n  pixscii photo.jpg --color\n  pixscii photo.jpg --chars '@#+-. '"
)]
pub struct Cli {
    /// Path to the input image file (PNG, JPEG, BMP, GIF).
    pub image: PathBuf,

    /// Output width in characters [default: 100].
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Character set ordered from darkest to lightest [default: "@%#*+=-:. "].
    #[arg(short, long, allow_hyphen_values = true)]
    pub chars: Option<String>,

    /// Additional path to save the ASCII art as a .txt file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable colored output using 24-bit ANSI escape codes.
    #[arg(long, default_value_t = false)]
    pub color: bool,

    /// Directory where every render is auto-saved [default: received].
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// TOML configuration file. Default: config/default.toml when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_overrides_unset() {
        let cli = Cli::try_parse_from(["pixscii", "img.png"]).unwrap();
        assert_eq!(cli.image, PathBuf::from("img.png"));
        assert!(cli.width.is_none());
        assert!(cli.chars.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.color);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn short_flags_are_accepted() {
        let cli =
            Cli::try_parse_from(["pixscii", "img.png", "-w", "40", "-c", "#. ", "-o", "a.txt"])
                .unwrap();
        assert_eq!(cli.width, Some(40));
        assert_eq!(cli.chars.as_deref(), Some("#. "));
        assert_eq!(cli.output, Some(PathBuf::from("a.txt")));
    }

    #[test]
    fn zero_width_is_refused_by_the_parser() {
        assert!(Cli::try_parse_from(["pixscii", "img.png", "--width", "0"]).is_err());
    }

    #[test]
    fn image_is_required() {
        assert!(Cli::try_parse_from(["pixscii", "--color"]).is_err());
    }

    #[test]
    fn help_text_uses_plain_punctuation() {
        use clap::CommandFactory;
        let mut cmd = Cli::command();
        let about = cmd.get_about().map(ToString::to_string).unwrap_or_default();
        assert!(about.starts_with("pixscii: convert an image"), "{about}");
        let help = cmd.render_help().to_string();
        assert!(!help.contains('\u{2014}'), "{help}");
    }
}
