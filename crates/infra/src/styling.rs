// crates/infra/src/styling.rs
use ansi_term::Colour;
use dirlist_ports::styling::NameStyler;
use dirlist_shared_kernel::EntryKind;

/// Blue directories, cyan symlinks, everything else untouched.
pub fn colorize(name: &str, kind: EntryKind) -> String {
    match kind {
        EntryKind::Directory => Colour::Blue.paint(name).to_string(),
        EntryKind::Symlink => Colour::Cyan.paint(name).to_string(),
        _ => name.to_string(),
    }
}

/// [`NameStyler`] emitting ANSI escape sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

impl NameStyler for AnsiStyler {
    fn style(&self, name: &str, kind: EntryKind) -> String {
        colorize(name, kind)
    }
}
