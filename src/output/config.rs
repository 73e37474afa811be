//! Output configuration types

use termcolor::{Color, ColorSpec};

const DEFAULT_INDENT: &str = "    ";

/// Colors used for tree lines.
#[derive(Debug, Clone)]
pub struct Palette {
    pub directory: ColorSpec,
    pub file: ColorSpec,
}

impl Default for Palette {
    fn default() -> Self {
        let mut directory = ColorSpec::new();
        directory.set_fg(Some(Color::Blue)).set_intense(true);
        let mut file = ColorSpec::new();
        file.set_fg(Some(Color::Yellow)).set_intense(true);
        Self { directory, file }
    }
}

/// Configuration for console output.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Repeated once per depth level
    pub indent: String,
    pub palette: Palette,
}

impl OutputConfig {
    /// Indentation for an entry at `depth`.
    pub fn indent_for(&self, depth: usize) -> String {
        self.indent.repeat(depth)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            indent: DEFAULT_INDENT.to_string(),
            palette: Palette::default(),
        }
    }
}
