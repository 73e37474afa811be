//! Console presenter
//!
//! Prints each entry as soon as the crawler reaches it. Directories show
//! their name only; files add the size/date summary.

use std::error::Error;
use std::io::{self, Write};

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};
use url::Url;

use crate::listing::ListingEntry;
use crate::tree::CrawlOutput;

use super::config::OutputConfig;

/// Writes the crawl as an indented, colored tree.
pub struct ConsolePresenter<W> {
    config: OutputConfig,
    out: W,
}

impl ConsolePresenter<StandardStream> {
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(config, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> ConsolePresenter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_colored_line(&mut self, spec: &ColorSpec, text: &str) -> io::Result<()> {
        if self.config.use_color {
            self.out.set_color(spec)?;
        }
        write!(self.out, "{}", text)?;
        if self.config.use_color {
            self.out.reset()?;
        }
        writeln!(self.out)
    }
}

impl<W: WriteColor> CrawlOutput for ConsolePresenter<W> {
    fn output_entry(&mut self, entry: &ListingEntry, depth: usize) -> io::Result<()> {
        let indent = self.config.indent_for(depth);
        if entry.is_directory {
            let spec = self.config.palette.directory.clone();
            self.write_colored_line(&spec, &format!("{}{}", indent, entry.name))
        } else {
            let spec = self.config.palette.file.clone();
            self.write_colored_line(
                &spec,
                &format!("{}{}  {}", indent, entry.name, entry.details()),
            )
        }
    }

    fn output_skipped(&mut self, url: &Url, depth: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "{}The page at {} is not a directory listing. Skipping.",
            self.config.indent_for(depth),
            url
        )
    }

    fn output_error(&mut self, url: &str, error: &dyn Error, depth: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "{}Error accessing {}: {}",
            self.config.indent_for(depth),
            url,
            error
        )
    }
}

#[cfg(test)]
mod tests {
    use termcolor::Buffer;

    use super::*;
    use crate::listing::RawEntry;
    use crate::metadata::FileMetadata;

    fn plain() -> ConsolePresenter<Buffer> {
        ConsolePresenter::new(
            OutputConfig {
                use_color: false,
                ..Default::default()
            },
            Buffer::no_color(),
        )
    }

    fn output(presenter: ConsolePresenter<Buffer>) -> String {
        String::from_utf8(presenter.into_inner().into_inner()).unwrap()
    }

    fn raw(name: &str, url: &str, is_directory: bool) -> RawEntry {
        RawEntry {
            name: name.to_string(),
            url: Url::parse(url).unwrap(),
            is_directory,
            last_modified: "-".to_string(),
        }
    }

    #[test]
    fn test_indentation_per_depth() {
        let mut presenter = plain();
        let dir = ListingEntry::directory(raw("sub", "http://host/sub/", true));
        presenter.output_entry(&dir, 0).unwrap();
        presenter.output_entry(&dir, 2).unwrap();
        assert_eq!(output(presenter), "sub\n        sub\n");
    }

    #[test]
    fn test_file_line_includes_details() {
        let mut presenter = plain();
        let file = ListingEntry::file(
            raw("a.txt", "http://host/a.txt", false),
            FileMetadata::unavailable(),
        );
        presenter.output_entry(&file, 1).unwrap();
        assert_eq!(
            output(presenter),
            "    a.txt  Size: N/A MB, Last Modified: N/A\n"
        );
    }

    #[test]
    fn test_skip_and_error_notices() {
        let mut presenter = plain();
        let url = Url::parse("http://host/readme/").unwrap();
        presenter.output_skipped(&url, 1).unwrap();
        let err = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");
        presenter.output_error(url.as_str(), &err, 0).unwrap();
        assert_eq!(
            output(presenter),
            "    The page at http://host/readme/ is not a directory listing. Skipping.\n\
             Error accessing http://host/readme/: refused\n"
        );
    }

    #[test]
    fn test_colored_lines_are_reset() {
        let mut presenter = ConsolePresenter::new(OutputConfig::default(), Buffer::ansi());
        let dir = ListingEntry::directory(raw("sub", "http://host/sub/", true));
        presenter.output_entry(&dir, 0).unwrap();
        let text = output(presenter);
        assert!(text.starts_with("\x1b["), "expected color escape: {:?}", text);
        assert!(text.ends_with("sub\x1b[0m\n"), "expected reset: {:?}", text);
    }
}
