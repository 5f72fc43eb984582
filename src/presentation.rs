// src/presentation.rs
use std::io::{self, Write};

use dirlist_domain::{EntryRecord, OutputFormat, RenderOptions};
use dirlist_shared_kernel::{EntryKind, FileSize, LinkCount, ModificationTime, PresentationResult};
use serde::Serialize;
use tabwriter::TabWriter;

/// Spaces between aligned columns.
const COLUMN_PADDING: usize = 2;

/// Renders the listing into a string. See [`write_listing`].
pub fn render(records: &[EntryRecord], options: &RenderOptions) -> PresentationResult<String> {
    let mut buf = Vec::new();
    write_listing(&mut buf, records, options)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes the listing in collector order, flushed once at the end.
pub fn write_listing<W: Write>(
    writer: W,
    records: &[EntryRecord],
    options: &RenderOptions,
) -> PresentationResult<()> {
    match options.format {
        OutputFormat::Columns => write_columns(writer, records, options)?,
        OutputFormat::Json => write_json(writer, records, options)?,
    }
    Ok(())
}

/// Size column text: binary prefixes when human readable, raw bytes otherwise.
pub fn format_size(size: FileSize, human_readable: bool) -> String {
    if human_readable { size.to_human() } else { size.bytes().to_string() }
}

/// The eight long-format fields in display order:
/// type, permission, links, group, user, size, modified, name.
pub fn long_fields(record: &EntryRecord, human_readable: bool) -> [String; 8] {
    [
        record.kind.to_string(),
        record.permission.to_string(),
        record.links.to_string(),
        record.group.clone(),
        record.owner.clone(),
        format_size(record.size, human_readable),
        record.modified.to_string(),
        record.display_name.clone(),
    ]
}

fn write_columns<W: Write>(
    writer: W,
    records: &[EntryRecord],
    options: &RenderOptions,
) -> io::Result<()> {
    let mut tw = TabWriter::new(writer).minwidth(0).padding(COLUMN_PADDING).ansi(true);

    for record in records {
        if options.long_format {
            writeln!(tw, "{}", long_fields(record, options.human_readable).join("\t"))?;
        } else {
            writeln!(tw, "{}", record.display_name)?;
        }
    }

    writeln!(tw)?;
    tw.flush()
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    name: &'a str,
    kind: EntryKind,
    permission: String,
    links: LinkCount,
    owner: &'a str,
    group: &'a str,
    size: FileSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    size_human: Option<String>,
    modified: &'a ModificationTime,
}

impl<'a> JsonEntry<'a> {
    fn new(record: &'a EntryRecord, human_readable: bool) -> Self {
        Self {
            name: &record.name,
            kind: record.kind,
            permission: record.permission.to_string(),
            links: record.links,
            owner: &record.owner,
            group: &record.group,
            size: record.size,
            size_human: human_readable.then(|| record.size.to_human()),
            modified: &record.modified,
        }
    }
}

fn write_json<W: Write>(
    mut writer: W,
    records: &[EntryRecord],
    options: &RenderOptions,
) -> PresentationResult<()> {
    let entries: Vec<_> =
        records.iter().map(|r| JsonEntry::new(r, options.human_readable)).collect();
    serde_json::to_writer_pretty(&mut writer, &entries)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
