//! Console formatter
//!
//! Writes tree lines directly to stdout as the traversal produces them,
//! with directories in bold blue and files unstyled. With color disabled
//! the output bytes are exactly prefix + connector + name per line.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::sink::{TreeSink, connector};

pub struct ConsoleFormatter {
    stdout: StandardStream,
}

impl ConsoleFormatter {
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    /// Print the header line and the blank line that separates it from
    /// the tree. The path renders in bold blue, the label unstyled.
    pub fn header(&mut self, root: &std::path::Path) -> io::Result<()> {
        write!(self.stdout, "📁 Project Structure of: ")?;
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.stdout, "{}", root.display())?;
        self.stdout.reset()?;
        writeln!(self.stdout)?;
        writeln!(self.stdout)?;
        Ok(())
    }
}

impl TreeSink for ConsoleFormatter {
    fn entry(&mut self, name: &str, is_dir: bool, is_last: bool, prefix: &str) -> io::Result<()> {
        write!(self.stdout, "{}{}", prefix, connector(is_last))?;
        if is_dir {
            self.stdout
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        }
        write!(self.stdout, "{}", name)?;
        self.stdout.reset()?;
        writeln!(self.stdout)?;
        Ok(())
    }
}
