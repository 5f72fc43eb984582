// crates/ports/src/styling.rs
use dirlist_shared_kernel::EntryKind;

/// Pure decoration of a name for display.
pub trait NameStyler: Send + Sync {
    fn style(&self, name: &str, kind: EntryKind) -> String;
}
