use longview_match::MatchResult;
use std::collections::BTreeMap;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Human,
    Json,
    Quiet,
}

pub struct Output<W: WriteColor> {
    out: W,
    format: Format,
}

impl Output<StandardStream> {
    pub fn stdout(color: bool, format: Format) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(color_choice), format)
    }
}

impl<W: WriteColor> Output<W> {
    pub fn new(out: W, format: Format) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn set_color(&mut self, color: Color) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(Some(color)))
    }

    fn set_dim(&mut self) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_dimmed(true))
    }

    pub fn print_regex(&mut self, source: &str) -> io::Result<()> {
        writeln!(self.out, "{}", source)
    }

    pub fn print_result(&mut self, subject: &str, result: &MatchResult) -> io::Result<()> {
        match self.format {
            Format::Quiet => Ok(()),
            Format::Json => self.print_json(subject, result),
            Format::Human => self.print_human(subject, result),
        }
    }

    fn print_human(&mut self, subject: &str, result: &MatchResult) -> io::Result<()> {
        let Some(values) = result.values() else {
            self.set_color(Color::Red)?;
            write!(self.out, "✗")?;
            self.out.reset()?;
            return writeln!(self.out, " {}", subject);
        };

        self.set_color(Color::Green)?;
        write!(self.out, "✓")?;
        self.out.reset()?;
        writeln!(self.out, " {}", subject)?;

        let sorted: BTreeMap<_, _> = values.iter().collect();
        for (name, value) in sorted {
            self.set_dim()?;
            write!(self.out, "    {} =", name)?;
            self.out.reset()?;
            writeln!(self.out, " {}", value)?;
        }
        Ok(())
    }

    fn print_json(&mut self, subject: &str, result: &MatchResult) -> io::Result<()> {
        let line = match result.values() {
            Some(values) => {
                let sorted: BTreeMap<_, _> = values.iter().collect();
                serde_json::json!({ "subject": subject, "matched": true, "values": sorted })
            }
            None => serde_json::json!({ "subject": subject, "matched": false }),
        };
        writeln!(self.out, "{}", line)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
