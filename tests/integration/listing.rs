use dirlist::{app, config::Config};
use dirlist_domain::ListOptions;

use crate::common::{fields_for, listed_lines, sample_workspace};

fn list(config: &Config) -> (String, dirlist_domain::Listing) {
    let mut buf = Vec::new();
    let listing = app::run_with(config, false, &mut buf).unwrap();
    (String::from_utf8(buf).unwrap(), listing)
}

fn config_for(path: &std::path::Path, list: ListOptions) -> Config {
    Config { path: path.to_path_buf(), list, ..Config::default() }
}

#[test]
fn long_listing_of_sample_directory() {
    let ws = sample_workspace();
    let list_opts = ListOptions { long_format: true, ..ListOptions::default() };
    let (out, listing) = list(&config_for(ws.path(), list_opts));

    assert_eq!(listed_lines(&out).len(), 2, "{out}");
    assert!(listing.is_complete());

    let sub = fields_for(&out, "sub");
    assert_eq!(sub.len(), 10, "{sub:?}"); // modified time spans three fields
    assert_eq!(sub[0], "d");
    assert_eq!(sub[2], "2");

    let file = fields_for(&out, "a.txt");
    assert_eq!(file[0], "-");
    assert_eq!(file[2], "1");
    assert_eq!(file[5], "500");
}

#[test]
fn hidden_entries_need_the_all_flag() {
    let ws = sample_workspace();
    let (out, listing) = list(&config_for(ws.path(), ListOptions::default()));
    assert!(listing.records.iter().all(|r| !r.name.starts_with('.')));
    assert!(!out.contains(".hidden"));

    let all = ListOptions { show_hidden: true, ..ListOptions::default() };
    let (out, listing) = list(&config_for(ws.path(), all));
    assert_eq!(listing.records.len(), 3);
    assert!(listed_lines(&out).contains(&".hidden"));
}

#[test]
fn link_count_follows_directory_contents() {
    let ws = sample_workspace();
    ws.file("sub/three", 0);
    ws.file("sub/.four", 0);
    ws.dir("empty");

    let (_, listing) = list(&config_for(ws.path(), ListOptions::default()));
    let links = |name: &str| {
        listing.records.iter().find(|r| r.name == name).map(|r| r.links.value()).unwrap()
    };
    // Hidden children count too.
    assert_eq!(links("sub"), 4);
    assert_eq!(links("empty"), 0);
    assert_eq!(links("a.txt"), 1);
}

#[test]
fn sizes_switch_between_raw_and_human() {
    let ws = sample_workspace();
    ws.file("big.bin", 1536);

    let raw = ListOptions { long_format: true, ..ListOptions::default() };
    let (out, _) = list(&config_for(ws.path(), raw));
    assert_eq!(fields_for(&out, "big.bin")[5], "1536");

    let human = ListOptions { long_format: true, human_readable: true, ..ListOptions::default() };
    let (out, _) = list(&config_for(ws.path(), human));
    assert_eq!(fields_for(&out, "big.bin")[5], "1.5KiB");
    assert_eq!(fields_for(&out, "a.txt")[5], "500.0B");
}

#[cfg(unix)]
#[test]
fn owner_and_group_are_account_names() {
    let ws = sample_workspace();
    let long = ListOptions { long_format: true, ..ListOptions::default() };
    let (_, listing) = list(&config_for(ws.path(), long));
    for record in &listing.records {
        assert!(!record.owner.is_empty());
        assert!(!record.group.is_empty());
    }
}

#[cfg(unix)]
#[test]
fn symlinks_are_listed_without_following() {
    let ws = sample_workspace();
    ws.symlink("does-not-exist", "dangling");

    let (_, listing) = list(&config_for(ws.path(), ListOptions::default()));
    let link = listing.records.iter().find(|r| r.name == "dangling").unwrap();
    assert!(link.kind.is_symlink());
    assert_eq!(link.kind.symbol(), 'l');
}

#[test]
fn missing_root_fails_without_output() {
    let ws = sample_workspace();
    let config = config_for(&ws.path().join("missing"), ListOptions::default());
    let mut buf = Vec::new();
    let err = app::run_with(&config, false, &mut buf).unwrap_err();
    assert!(err.is_fatal());
    assert!(buf.is_empty());
}
