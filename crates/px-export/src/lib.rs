/// Output sinks for pixscii: terminal printing and plain-text files.

pub mod naming;
pub mod sink;

pub use naming::auto_save_path;
pub use sink::{strip_markers, to_file, to_terminal};
