//! Persistence adapter: synchronous key-value storage keyed by namespace.

pub mod codec;
pub mod file;
pub mod memory;
pub mod persist;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use persist::PersistListener;

/// Durable key-value storage. Failures are the implementation's concern:
/// they are logged and swallowed, never surfaced to the store.
pub trait Storage: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;

    fn save(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}

/// Logical datasets and the storage key each one lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    KanbanBoards,
    KanbanCurrentBoard,
    KanbanTags,
    Notes,
    NoteTags,
    Analytics,
    AnalyticsSettings,
    Theme,
}

impl Namespace {
    pub const ALL: [Namespace; 8] = [
        Namespace::KanbanBoards,
        Namespace::KanbanCurrentBoard,
        Namespace::KanbanTags,
        Namespace::Notes,
        Namespace::NoteTags,
        Namespace::Analytics,
        Namespace::AnalyticsSettings,
        Namespace::Theme,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Namespace::KanbanBoards => "planly-kanban-boards",
            Namespace::KanbanCurrentBoard => "planly-kanban-current-board",
            Namespace::KanbanTags => "planly-kanban-tags",
            Namespace::Notes => "planly-notes",
            Namespace::NoteTags => "planly-tags",
            Namespace::Analytics => "planly-analytics",
            Namespace::AnalyticsSettings => "planly-analytics-settings",
            Namespace::Theme => "planly-theme",
        }
    }

    /// Field name used for this namespace in a backup document.
    pub fn backup_field(self) -> &'static str {
        match self {
            Namespace::KanbanBoards => "kanbanBoards",
            Namespace::KanbanCurrentBoard => "kanbanCurrentBoard",
            Namespace::KanbanTags => "kanbanTags",
            Namespace::Notes => "notes",
            Namespace::NoteTags => "tags",
            Namespace::Analytics => "analytics",
            Namespace::AnalyticsSettings => "analyticsSettings",
            Namespace::Theme => "theme",
        }
    }

    /// Whether the stored value is a bare string rather than JSON.
    pub fn is_raw(self) -> bool {
        matches!(self, Namespace::KanbanCurrentBoard | Namespace::Theme)
    }
}
