// crates/domain/src/options.rs

/// Flags shared by the collector and the formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Do not ignore entries starting with `.`.
    pub show_hidden: bool,
    /// Use the long listing format.
    pub long_format: bool,
    /// Show sizes with binary prefixes.
    pub human_readable: bool,
}

impl ListOptions {
    pub fn collect_options(&self, colorize: bool) -> CollectOptions {
        CollectOptions { show_hidden: self.show_hidden, colorize }
    }

    pub fn render_options(&self, format: OutputFormat) -> RenderOptions {
        RenderOptions {
            long_format: self.long_format,
            human_readable: self.human_readable,
            format,
        }
    }
}

/// What the collector needs to know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectOptions {
    pub show_hidden: bool,
    pub colorize: bool,
}

/// What the formatter needs to know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub long_format: bool,
    pub human_readable: bool,
    pub format: OutputFormat,
}

/// Output format for the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-aligned text columns.
    #[default]
    Columns,
    Json,
}

/// When to wrap directory and symlink names in color codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `Auto` colors only a terminal, and only when `NO_COLOR` is not set.
    pub const fn enabled(self, stdout_is_terminal: bool, no_color_requested: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stdout_is_terminal && !no_color_requested,
        }
    }
}
