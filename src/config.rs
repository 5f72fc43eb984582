// src/config.rs
use std::io::IsTerminal;
use std::path::PathBuf;

use dirlist_domain::{CollectOptions, ColorMode, ListOptions, OutputFormat, RenderOptions};

use crate::args::Args;
use crate::options;

/// Directory listed when no path is given.
pub const DEFAULT_PATH: &str = "./";

/// Resolved settings for one run. Passed explicitly to every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub list: ListOptions,
    pub color: ColorMode,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            list: ListOptions::default(),
            color: ColorMode::default(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Whether names get color codes on this stdout.
    pub fn colorize(&self) -> bool {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        self.color.enabled(std::io::stdout().is_terminal(), no_color)
    }

    pub fn collect_options(&self, colorize: bool) -> CollectOptions {
        self.list.collect_options(colorize)
    }

    pub fn render_options(&self) -> RenderOptions {
        self.list.render_options(self.format)
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        // Only the first positional path is listed.
        let path = args
            .paths
            .into_iter()
            .next()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH));

        Self {
            path,
            list: ListOptions {
                show_hidden: args.all,
                long_format: args.long,
                human_readable: args.readable,
            },
            color: args.color.into(),
            format: args.format.into(),
        }
    }
}

// From trait implementations for CLI -> domain enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::ColorChoice, ColorMode, Auto, Always, Never);
map_enum!(options::OutputFormat, OutputFormat, Columns, Json);
