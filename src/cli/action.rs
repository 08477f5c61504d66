use std::fmt;

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    List,
    Search,
    Create,
    Delete,
    ExportCsv,
    ImportCsv,
    Exit,
}

impl Action {
    /// Menu entries in display order.
    pub const ALL: [Action; 7] = [
        Action::List,
        Action::Search,
        Action::Create,
        Action::Delete,
        Action::ExportCsv,
        Action::ImportCsv,
        Action::Exit,
    ];

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::List => "📖 List",
            Self::Search => "🔍 Search",
            Self::Create => "🧑 Create",
            Self::Delete => "🧹 Delete",
            Self::ExportCsv => "🚢 Export CSV",
            Self::ImportCsv => "📥 Import CSV",
            Self::Exit => "❌ Exit",
        }
    }

    /// Position in [`Action::ALL`].
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|a| a == self).unwrap_or_default()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
