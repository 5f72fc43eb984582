use dirlist_shared_kernel::{EntryKind, FileSize, LinkCount, ModificationTime, PermissionBits};

/// 一覧の1行分に相当するエントリ情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub kind: EntryKind,
    pub permission: PermissionBits,
    pub links: LinkCount,
    pub owner: String,
    pub group: String,
    pub size: FileSize,
    pub modified: ModificationTime,
    /// ベース名（装飾なし）
    pub name: String,
    /// 表示用の名前。ディレクトリ・シンボリックリンクは色付けされる場合がある
    pub display_name: String,
}

impl EntryRecord {
    pub fn is_hidden(&self) -> bool {
        is_hidden_name(&self.name)
    }
}

/// Names starting with `.` are hidden unless explicitly requested.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}
