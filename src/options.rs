use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;

/// Every option the command line understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Source,
    Output,
    Format,
    Portrait,
    Landscape,
    HCenter,
    VCenter,
    Help,
    Caching,
    Timeout,
    Version,
    Margin,
    StylesheetMedia,
    PrintBackground,
    IgnoreHttpErrors,
    Username,
    Password,
    Paginate,
    EnablePlugins,
    SaveDelay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    NoArgument,
    RequiredArgument,
}

impl OptionKind {
    pub const ALL: [OptionKind; 20] = [
        OptionKind::Source,
        OptionKind::Output,
        OptionKind::Format,
        OptionKind::Portrait,
        OptionKind::Landscape,
        OptionKind::HCenter,
        OptionKind::VCenter,
        OptionKind::Help,
        OptionKind::Caching,
        OptionKind::Timeout,
        OptionKind::Version,
        OptionKind::Margin,
        OptionKind::StylesheetMedia,
        OptionKind::PrintBackground,
        OptionKind::IgnoreHttpErrors,
        OptionKind::Username,
        OptionKind::Password,
        OptionKind::Paginate,
        OptionKind::EnablePlugins,
        OptionKind::SaveDelay,
    ];

    /// Long option name, without the leading `--`.
    pub fn name(self) -> &'static str {
        match self {
            OptionKind::Source => "source",
            OptionKind::Output => "output",
            OptionKind::Format => "format",
            OptionKind::Portrait => "portrait",
            OptionKind::Landscape => "landscape",
            OptionKind::HCenter => "hcenter",
            OptionKind::VCenter => "vcenter",
            OptionKind::Help => "help",
            OptionKind::Caching => "caching",
            OptionKind::Timeout => "timeout",
            OptionKind::Version => "version",
            OptionKind::Margin => "margin",
            OptionKind::StylesheetMedia => "stylesheet-media",
            OptionKind::PrintBackground => "print-background",
            OptionKind::IgnoreHttpErrors => "ignore-http-errors",
            OptionKind::Username => "username",
            OptionKind::Password => "password",
            OptionKind::Paginate => "paginate",
            OptionKind::EnablePlugins => "enable-plugins",
            OptionKind::SaveDelay => "save-delay",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            OptionKind::Portrait
            | OptionKind::Landscape
            | OptionKind::HCenter
            | OptionKind::VCenter
            | OptionKind::Help
            | OptionKind::Version
            | OptionKind::IgnoreHttpErrors => Arity::NoArgument,
            _ => Arity::RequiredArgument,
        }
    }

    fn arg(self) -> Arg {
        let arg = Arg::new(self.name()).long(self.name());
        match (self, self.arity()) {
            (OptionKind::Help, _) => arg.short('h').action(ArgAction::Help),
            (OptionKind::Version, _) => arg.action(ArgAction::Version),
            (_, Arity::NoArgument) => arg.action(ArgAction::Count),
            // The next token is always the value, even `-5.5` or `--foo`.
            (_, Arity::RequiredArgument) => arg
                .value_name("arg")
                .action(ArgAction::Append)
                .allow_hyphen_values(true),
        }
    }
}

/// One option occurrence, in command-line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedOption {
    pub kind: OptionKind,
    pub value: Option<String>,
}

/// Option occurrences sorted by their position on the command line.
#[derive(Debug)]
pub struct ScannedOptions(std::vec::IntoIter<ScannedOption>);

impl Iterator for ScannedOptions {
    type Item = ScannedOption;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

#[derive(Debug)]
pub enum Scan {
    Help,
    Version,
    Options(ScannedOptions),
}

pub fn command() -> Command {
    let command = Command::new("wkpdf")
        .version(crate::usage::version_text())
        .override_usage("wkpdf <options>")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .infer_long_args(true);

    OptionKind::ALL
        .into_iter()
        .fold(command, |command, kind| command.arg(kind.arg()))
}

/// Tokenizes `args` (program name first) against the option table.
///
/// `--help`/`-h` and `--version` stop scanning as soon as they are met.
pub fn scan<I, T>(args: I) -> Result<Scan, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp => return Ok(Scan::Help),
            ErrorKind::DisplayVersion => return Ok(Scan::Version),
            _ => return Err(err),
        },
    };

    Ok(Scan::Options(collect_in_order(&matches)))
}

fn collect_in_order(matches: &ArgMatches) -> ScannedOptions {
    let mut positioned: Vec<(usize, ScannedOption)> = Vec::new();

    for kind in OptionKind::ALL {
        if matches!(kind, OptionKind::Help | OptionKind::Version) {
            continue;
        }
        let id = kind.name();
        if matches.value_source(id) != Some(ValueSource::CommandLine) {
            continue;
        }
        let indices = matches.indices_of(id).into_iter().flatten();

        match kind.arity() {
            // Repeated flags keep only their last position.
            Arity::NoArgument => {
                if let Some(index) = indices.last() {
                    positioned.push((index, ScannedOption { kind, value: None }));
                }
            }
            Arity::RequiredArgument => {
                let values = matches.get_many::<String>(id).into_iter().flatten();
                positioned.extend(indices.zip(values).map(|(index, value)| {
                    let value = Some(value.clone());
                    (index, ScannedOption { kind, value })
                }));
            }
        }
    }

    positioned.sort_by_key(|(index, _)| *index);
    ScannedOptions(
        positioned
            .into_iter()
            .map(|(_, option)| option)
            .collect::<Vec<_>>()
            .into_iter(),
    )
}
