// crates/infra/src/accounts.rs
use dirlist_ports::accounts::AccountDirectory;
use dirlist_shared_kernel::{Gid, Uid};

/// Looks names up in the operating system's account database.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAccounts;

#[cfg(unix)]
impl AccountDirectory for SystemAccounts {
    fn user_name(&self, uid: Uid) -> Option<String> {
        uzers::get_user_by_uid(uid.raw()).map(|user| user.name().to_string_lossy().into_owned())
    }

    fn group_name(&self, gid: Gid) -> Option<String> {
        uzers::get_group_by_gid(gid.raw()).map(|group| group.name().to_string_lossy().into_owned())
    }
}

// Without an id database every id maps to the logged-in account.
#[cfg(not(unix))]
impl AccountDirectory for SystemAccounts {
    fn user_name(&self, _uid: Uid) -> Option<String> {
        std::env::var("USERNAME").ok()
    }

    fn group_name(&self, _gid: Gid) -> Option<String> {
        std::env::var("USERNAME").ok()
    }
}
