use anyhow::Context;
use std::io::Write;

use crate::config::Configuration;

/// Receives the finished configuration. Producing the PDF happens behind this seam.
pub trait Renderer {
    fn render(&mut self, config: Configuration) -> anyhow::Result<()>;
}

/// Hands the configuration to an out-of-process renderer as pretty JSON.
pub struct JsonHandoff<W: Write> {
    writer: W,
}

impl<W: Write> JsonHandoff<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for JsonHandoff<W> {
    fn render(&mut self, config: Configuration) -> anyhow::Result<()> {
        log::info!(
            "handing off {} -> {}",
            config.source,
            config.output.display()
        );
        if !config.has_margin() {
            log::debug!("no margin given, renderer default applies");
        }
        serde_json::to_writer_pretty(&mut self.writer, &config)
            .context("Can't serialize configuration")?;
        writeln!(self.writer).context("Can't write configuration")?;
        self.writer.flush().context("Can't flush configuration")?;
        Ok(())
    }
}
