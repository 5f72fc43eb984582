// crates/shared-kernel/src/value_objects/permissions.rs
use std::fmt;

use serde::{Deserialize, Serialize};

const TRIADS: [&str; 8] = ["---", "--x", "-w-", "-wx", "r--", "r-x", "rw-", "rwx"];

/// The nine owner/group/other permission bits of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct PermissionBits(u32);

impl PermissionBits {
    /// Keeps only the low nine bits; type, setuid and sticky bits are dropped.
    #[inline]
    pub const fn from_mode(mode: u32) -> Self {
        Self(mode & 0o777)
    }

    #[inline]
    pub const fn mode(self) -> u32 {
        self.0
    }

    #[cfg(unix)]
    pub fn from_metadata(metadata: &std::fs::Metadata) -> Self {
        use std::os::unix::fs::PermissionsExt;

        Self::from_mode(metadata.permissions().mode())
    }

    /// Without mode bits the read-only attribute is all there is to go on.
    #[cfg(not(unix))]
    pub fn from_metadata(metadata: &std::fs::Metadata) -> Self {
        let base = if metadata.permissions().readonly() { 0o444 } else { 0o666 };
        let exec = if metadata.is_dir() { 0o111 } else { 0 };
        Self::from_mode(base | exec)
    }
}

impl fmt::Display for PermissionBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let user = TRIADS[((self.0 >> 6) & 0o7) as usize];
        let group = TRIADS[((self.0 >> 3) & 0o7) as usize];
        let other = TRIADS[(self.0 & 0o7) as usize];
        write!(f, "{user}{group}{other}")
    }
}
