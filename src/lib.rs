pub mod config;
pub mod convert;
pub mod logger;
pub mod options;
pub mod paper;
pub mod parser;
pub mod paths;
pub mod render;
pub mod usage;

pub use config::{CachingPolicy, Configuration, PaperOrientation, RenderOptions};
pub use paper::{PaperCatalog, PaperSize, StandardPaperCatalog};
pub use parser::{parse_args, CliError, CommandlineParser, Invocation};
pub use paths::{FileSystem, PathResolver};
pub use render::{JsonHandoff, Renderer};
