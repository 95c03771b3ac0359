//! User-facing text: failure messages and list view labels.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which remote operation failed. Each kind maps to one user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    FetchFailed,
    CreateFailed,
    UpdateFailed,
    DeleteFailed,
}

impl ErrorKind {
    /// Short machine-readable label used in log fields.
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::FetchFailed => "fetch",
            ErrorKind::CreateFailed => "create",
            ErrorKind::UpdateFailed => "update",
            ErrorKind::DeleteFailed => "delete",
        }
    }
}

/// Language of the user-facing text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    English,
    Japanese,
}

impl Locale {
    pub fn error_message(self, kind: ErrorKind) -> &'static str {
        match (self, kind) {
            (Locale::English, ErrorKind::FetchFailed) => "Failed to load todos",
            (Locale::English, ErrorKind::CreateFailed) => "Failed to add todo",
            (Locale::English, ErrorKind::UpdateFailed) => "Failed to update todo",
            (Locale::English, ErrorKind::DeleteFailed) => "Failed to delete todo",
            (Locale::Japanese, ErrorKind::FetchFailed) => "Todoの読み込みに失敗しました",
            (Locale::Japanese, ErrorKind::CreateFailed) => "Todoの追加に失敗しました",
            (Locale::Japanese, ErrorKind::UpdateFailed) => "Todoの更新に失敗しました",
            (Locale::Japanese, ErrorKind::DeleteFailed) => "Todoの削除に失敗しました",
        }
    }

    pub fn heading(self) -> &'static str {
        "Todo List"
    }

    pub fn loading_indicator(self) -> &'static str {
        match self {
            Locale::English => "Loading...",
            Locale::Japanese => "読み込み中...",
        }
    }

    pub fn empty_indicator(self) -> &'static str {
        match self {
            Locale::English => "No todos",
            Locale::Japanese => "Todoがありません",
        }
    }

    pub fn draft_prompt(self) -> &'static str {
        match self {
            Locale::English => "Enter a new todo...",
            Locale::Japanese => "新しいTodoを入力...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language `{0}` (expected `en` or `ja`)")]
pub struct UnknownLocale(String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "ja" | "japanese" => Ok(Locale::Japanese),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::English => "en",
            Locale::Japanese => "ja",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_distinct_message() {
        let kinds = [
            ErrorKind::FetchFailed,
            ErrorKind::CreateFailed,
            ErrorKind::UpdateFailed,
            ErrorKind::DeleteFailed,
        ];
        for locale in [Locale::English, Locale::Japanese] {
            let mut messages: Vec<_> = kinds.iter().map(|k| locale.error_message(*k)).collect();
            messages.sort_unstable();
            messages.dedup();
            assert_eq!(messages.len(), kinds.len(), "{locale}");
        }
    }

    #[test]
    fn japanese_fetch_message() {
        assert_eq!(
            Locale::Japanese.error_message(ErrorKind::FetchFailed),
            "Todoの読み込みに失敗しました"
        );
    }

    #[test]
    fn locale_parses_codes_and_names() {
        assert_eq!("ja".parse::<Locale>().unwrap(), Locale::Japanese);
        assert_eq!("English".parse::<Locale>().unwrap(), Locale::English);
        assert!("fr".parse::<Locale>().is_err());
    }
}
