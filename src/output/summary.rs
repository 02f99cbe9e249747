//! Summary printed after a successful render

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::BuildStats;

use super::config::OutputConfig;

/// Write where the image went and how much ended up in it.
pub fn write_summary<W: WriteColor>(out: &mut W, image: &Path, stats: &BuildStats) -> io::Result<()> {
    write!(out, "File system structure visualization saved as ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "{}", image.display())?;
    out.reset()?;
    writeln!(out)?;

    if stats.dirs == 0 {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(out, "nothing matched, the diagram is empty")?;
        out.reset()?;
    } else {
        writeln!(out, "{} directories, {} files", stats.dirs, stats.files)?;
    }
    Ok(())
}

pub fn print_summary(image: &Path, stats: &BuildStats, config: &OutputConfig) -> io::Result<()> {
    let choice = if config.use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_summary(&mut stdout, image, stats)
}
