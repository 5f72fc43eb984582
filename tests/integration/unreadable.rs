//! Entries whose details cannot be read are dropped, not fatal.

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_is_skipped() {
    use std::{fs, os::unix::fs::PermissionsExt};

    use dirlist::{app, config::Config};

    use crate::common::{listed_lines, sample_workspace};

    // Permission bits do not bind root.
    if running_as_root() {
        return;
    }

    let ws = sample_workspace();
    let locked = ws.dir("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let config = Config { path: ws.path().to_path_buf(), ..Config::default() };
    let mut buf = Vec::new();
    let result = app::run_with(&config, false, &mut buf);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let listing = result.unwrap();
    assert_eq!(listing.skipped.len(), 1);
    assert_eq!(listing.skipped[0].name, "locked");
    assert!(listing.skipped[0].reason.contains("cannot count links"));

    let out = String::from_utf8(buf).unwrap();
    let mut names = listed_lines(&out);
    names.sort_unstable();
    assert_eq!(names, ["a.txt", "sub"]);
}

#[cfg(unix)]
fn running_as_root() -> bool {
    use std::os::unix::fs::MetadataExt;

    // A file we just created is owned by our effective uid.
    let probe = tempfile::NamedTempFile::new().unwrap();
    probe.as_file().metadata().unwrap().uid() == 0
}
