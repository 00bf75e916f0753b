use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::paper::{PaperCatalog, PaperSize};

pub const DEFAULT_PAPER: &str = "A4";

/// Margin value meaning "let the renderer decide".
pub const MARGIN_UNSET: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaperOrientation {
    #[default]
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CachingPolicy {
    #[default]
    UseProtocolCachePolicy,
    // Never selected: `--caching` resolves to the protocol policy whatever its value.
    ReloadIgnoringCache,
}

/// Everything the renderer needs besides where to read from and write to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOptions {
    pub paper_size: PaperSize,
    pub paginate: bool,
    pub margin: f64,
    pub stylesheet_media: String,
    pub print_background: bool,
    pub paper_orientation: PaperOrientation,
    pub horizontally_centered: bool,
    pub vertically_centered: bool,
    pub caching_policy: CachingPolicy,
    pub timeout: f64,
    pub save_delay: f64,
    pub enable_plugins: bool,
    pub ignore_http_errors: bool,
    pub username: String,
    pub password: String,
}

impl RenderOptions {
    pub fn defaults(catalog: &dyn PaperCatalog) -> Self {
        Self {
            paper_size: catalog.size_for_paper_name(DEFAULT_PAPER),
            paginate: true,
            margin: MARGIN_UNSET,
            stylesheet_media: String::new(),
            print_background: false,
            paper_orientation: PaperOrientation::Portrait,
            horizontally_centered: false,
            vertically_centered: false,
            caching_policy: CachingPolicy::UseProtocolCachePolicy,
            timeout: 3600.0,
            save_delay: 0.0,
            enable_plugins: false,
            ignore_http_errors: false,
            username: String::new(),
            password: String::new(),
        }
    }
}

/// Fully parsed command line, handed to the renderer once complete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    /// Canonical URL of the document to convert.
    pub source: String,
    pub output: PathBuf,
    #[serde(flatten)]
    pub options: RenderOptions,
}

impl Configuration {
    pub fn has_margin(&self) -> bool {
        self.options.margin != MARGIN_UNSET
    }

    /// Paper size as laid out on the page, swapped for landscape.
    pub fn effective_paper_size(&self) -> PaperSize {
        match self.options.paper_orientation {
            PaperOrientation::Portrait => self.options.paper_size,
            PaperOrientation::Landscape => self.options.paper_size.rotated(),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("missing mandatory option --{0}")]
pub struct MissingOption(pub &'static str);

/// Mutable stage of a [`Configuration`] while options are being applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationBuilder {
    pub source: Option<String>,
    pub output: Option<PathBuf>,
    pub options: RenderOptions,
}

impl ConfigurationBuilder {
    pub fn with_defaults(catalog: &dyn PaperCatalog) -> Self {
        Self {
            source: None,
            output: None,
            options: RenderOptions::defaults(catalog),
        }
    }

    pub fn build(self) -> Result<Configuration, MissingOption> {
        let source = self.source.ok_or(MissingOption("source"))?;
        let output = self.output.ok_or(MissingOption("output"))?;
        Ok(Configuration {
            source,
            output,
            options: self.options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paper::StandardPaperCatalog;

    fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::with_defaults(&StandardPaperCatalog)
    }

    #[test]
    fn defaults_match_documented_values() {
        let options = builder().options;
        assert_eq!(options.paper_size, PaperSize::new(595.0, 842.0));
        assert!(options.paginate);
        assert_eq!(options.margin, -1.0);
        assert_eq!(options.stylesheet_media, "");
        assert!(!options.print_background);
        assert_eq!(options.paper_orientation, PaperOrientation::Portrait);
        assert!(!options.horizontally_centered);
        assert!(!options.vertically_centered);
        assert_eq!(options.caching_policy, CachingPolicy::UseProtocolCachePolicy);
        assert_eq!(options.timeout, 3600.0);
        assert_eq!(options.save_delay, 0.0);
        assert!(!options.enable_plugins);
        assert!(!options.ignore_http_errors);
        assert_eq!(options.username, "");
        assert_eq!(options.password, "");
    }

    #[test]
    fn build_requires_source_then_output() {
        let mut draft = builder();
        assert_eq!(draft.clone().build().unwrap_err(), MissingOption("source"));

        draft.source = Some("https://example.org/".into());
        assert_eq!(draft.clone().build().unwrap_err(), MissingOption("output"));

        draft.output = Some(PathBuf::from("out.pdf"));
        let config = draft.build().unwrap();
        assert_eq!(config.source, "https://example.org/");
        assert!(!config.has_margin());
    }

    #[test]
    fn explicit_margin_counts_even_when_negative() {
        let mut draft = builder();
        draft.source = Some("https://example.org/".into());
        draft.output = Some(PathBuf::from("out.pdf"));
        draft.options.margin = -5.5;
        assert!(draft.clone().build().unwrap().has_margin());

        draft.options.margin = MARGIN_UNSET;
        assert!(!draft.build().unwrap().has_margin());
    }

    #[test]
    fn landscape_swaps_effective_size() {
        let mut draft = builder();
        draft.source = Some("file:///tmp/a.html".into());
        draft.output = Some(PathBuf::from("a.pdf"));
        draft.options.paper_orientation = PaperOrientation::Landscape;
        let config = draft.build().unwrap();

        assert_eq!(config.options.paper_size, PaperSize::new(595.0, 842.0));
        assert_eq!(config.effective_paper_size(), PaperSize::new(842.0, 595.0));
    }

    #[test]
    fn serializes_flat_with_lowercase_enums() {
        let mut draft = builder();
        draft.source = Some("https://example.org/".into());
        draft.output = Some(PathBuf::from("/tmp/out.pdf"));
        let json = serde_json::to_value(draft.build().unwrap()).unwrap();

        assert_eq!(json["source"], "https://example.org/");
        assert_eq!(json["output"], "/tmp/out.pdf");
        assert_eq!(json["paper_orientation"], "portrait");
        assert_eq!(json["caching_policy"], "use_protocol_cache_policy");
        assert_eq!(json["paper_size"]["width"], 595.0);
    }
}
