use std::ffi::OsString;
use thiserror::Error;

use crate::config::{Configuration, ConfigurationBuilder, MissingOption, PaperOrientation};
use crate::convert::{self, ConvertError};
use crate::options::{self, OptionKind, Scan, ScannedOption};
use crate::paper::{PaperCatalog, StandardPaperCatalog};
use crate::paths::{FileSystem, PathResolver};

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Usage(#[from] clap::Error),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Missing(#[from] MissingOption),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(err) => err.exit_code(),
            CliError::Convert(_) | CliError::Missing(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

/// What the command line asked for.
#[derive(Debug)]
pub enum Invocation {
    Help,
    Version,
    Run(Configuration),
}

pub struct CommandlineParser<'a> {
    catalog: &'a dyn PaperCatalog,
    resolver: &'a dyn PathResolver,
}

impl<'a> CommandlineParser<'a> {
    pub fn new(catalog: &'a dyn PaperCatalog, resolver: &'a dyn PathResolver) -> Self {
        Self { catalog, resolver }
    }

    /// Parses `args` (program name first) into a finished [`Configuration`].
    ///
    /// Options are applied in command-line order and the first invalid value
    /// aborts the whole parse.
    pub fn parse<I, T>(&self, args: I) -> Result<Invocation>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let scanned = match options::scan(args)? {
            Scan::Help => return Ok(Invocation::Help),
            Scan::Version => return Ok(Invocation::Version),
            Scan::Options(scanned) => scanned,
        };

        let mut draft = ConfigurationBuilder::with_defaults(self.catalog);
        for option in scanned {
            self.apply(&mut draft, option)?;
        }

        Ok(Invocation::Run(draft.build()?))
    }

    fn apply(
        &self,
        draft: &mut ConfigurationBuilder,
        option: ScannedOption,
    ) -> std::result::Result<(), ConvertError> {
        let ScannedOption { kind, value } = option;
        let raw = value.unwrap_or_default();
        match kind {
            OptionKind::Password => log::debug!("applying --password ********"),
            _ => log::debug!("applying --{} {}", kind.name(), raw),
        }

        let options = &mut draft.options;
        match kind {
            OptionKind::Source => {
                draft.source = Some(convert::parse_source(&raw, self.resolver)?)
            }
            OptionKind::Output => {
                draft.output = Some(convert::parse_output_path(&raw, self.resolver))
            }
            OptionKind::Format => {
                options.paper_size = convert::parse_paper_size(&raw, self.catalog)?
            }
            OptionKind::Portrait => options.paper_orientation = PaperOrientation::Portrait,
            OptionKind::Landscape => options.paper_orientation = PaperOrientation::Landscape,
            OptionKind::HCenter => options.horizontally_centered = true,
            // Accepted but has never changed vertical centering.
            OptionKind::VCenter => {}
            OptionKind::Caching => options.caching_policy = convert::parse_caching(&raw),
            OptionKind::Timeout => options.timeout = convert::parse_float("timeout", &raw)?,
            OptionKind::Margin => options.margin = convert::parse_float("margin", &raw)?,
            OptionKind::SaveDelay => {
                options.save_delay = convert::parse_float("save-delay", &raw)?
            }
            OptionKind::StylesheetMedia => options.stylesheet_media = raw,
            OptionKind::PrintBackground => options.print_background = convert::parse_yes(&raw),
            OptionKind::IgnoreHttpErrors => options.ignore_http_errors = true,
            OptionKind::Username => options.username = raw,
            OptionKind::Password => options.password = raw,
            OptionKind::Paginate => options.paginate = convert::parse_yes(&raw),
            OptionKind::EnablePlugins => options.enable_plugins = convert::parse_yes(&raw),
            // Short-circuited by the scanner.
            OptionKind::Help | OptionKind::Version => {}
        }
        Ok(())
    }
}

/// Parses `args` against the standard paper catalog and the real filesystem.
pub fn parse_args<I, T>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CommandlineParser::new(&StandardPaperCatalog, &FileSystem).parse(args)
}
