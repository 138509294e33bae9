//! Naming-convention categorization
//!
//! Maps a function name to one of a fixed set of categories via an ordered
//! prefix table. Evaluation is top-to-bottom, first match wins, so
//! `test_and_validate` lands in `test` even though it contains `validate`.

use serde::{Deserialize, Serialize};

/// Fixed category set used to group functions for browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Display,
    Core,
    Test,
    Export,
    Install,
    Service,
    /// Default bucket when no prefix rule matches
    Helper,
}

impl Category {
    /// Canonical lowercase name, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Core => "core",
            Self::Test => "test",
            Self::Export => "export",
            Self::Install => "install",
            Self::Service => "service",
            Self::Helper => "helper",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered prefix rules. Order is significant: the first matching row wins.
const PREFIX_RULES: &[(Category, &[&str])] = &[
    (Category::Display, &["show_", "display_", "write_"]),
    (Category::Core, &["get_", "set_", "update_"]),
    (Category::Test, &["test_", "check_", "validate_"]),
    (Category::Export, &["export_", "import_", "backup_", "restore_"]),
    (Category::Install, &["install_", "add_", "remove_"]),
    (Category::Service, &["start_", "stop_", "restart_", "enable_"]),
];

/// Categorize a function name by its prefix.
///
/// Pure: the result depends only on the name, never on file or body content.
pub fn categorize(name: &str) -> Category {
    for (category, prefixes) in PREFIX_RULES {
        if prefixes.iter().any(|prefix| name.starts_with(prefix)) {
            return *category;
        }
    }
    Category::Helper
}
