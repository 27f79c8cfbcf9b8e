use serde::{Deserialize, Serialize};

use super::id::BookmarkId;

/// A saved reference to a remote database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: BookmarkId,
    pub host: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub database: String,
}

impl Bookmark {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            id: BookmarkId::new(),
            host: host.into(),
            user: user.into(),
            database: database.into(),
        }
    }

    /// Format: host/database, with a single slash between the two
    pub fn remote_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if self.database.is_empty() {
            host.to_string()
        } else {
            format!("{}/{}", host, self.database)
        }
    }

    pub fn field(&self, field: BookmarkField) -> &str {
        match field {
            BookmarkField::Host => &self.host,
            BookmarkField::User => &self.user,
            BookmarkField::Database => &self.database,
        }
    }
}

/// Editable form value. `id == None` means the form creates a new bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookmarkDraft {
    pub id: Option<BookmarkId>,
    pub host: String,
    pub user: String,
    pub database: String,
}

impl BookmarkDraft {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            host: host.into(),
            user: user.into(),
            database: database.into(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn field(&self, field: BookmarkField) -> &str {
        match field {
            BookmarkField::Host => &self.host,
            BookmarkField::User => &self.user,
            BookmarkField::Database => &self.database,
        }
    }

    pub fn field_mut(&mut self, field: BookmarkField) -> &mut String {
        match field {
            BookmarkField::Host => &mut self.host,
            BookmarkField::User => &mut self.user,
            BookmarkField::Database => &mut self.database,
        }
    }

    /// Keeps an existing id, otherwise assigns a fresh one.
    pub fn into_bookmark(self) -> Bookmark {
        Bookmark {
            id: self.id.unwrap_or_default(),
            host: self.host,
            user: self.user,
            database: self.database,
        }
    }
}

impl From<&Bookmark> for BookmarkDraft {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            id: Some(bookmark.id.clone()),
            host: bookmark.host.clone(),
            user: bookmark.user.clone(),
            database: bookmark.database.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BookmarkField {
    #[default]
    Host,
    User,
    Database,
}

impl BookmarkField {
    pub fn all() -> &'static [BookmarkField] {
        &[
            BookmarkField::Host,
            BookmarkField::User,
            BookmarkField::Database,
        ]
    }

    pub fn next(&self) -> BookmarkField {
        match self {
            BookmarkField::Host => BookmarkField::User,
            BookmarkField::User => BookmarkField::Database,
            BookmarkField::Database => BookmarkField::Host,
        }
    }

    pub fn prev(&self) -> BookmarkField {
        match self {
            BookmarkField::Host => BookmarkField::Database,
            BookmarkField::User => BookmarkField::Host,
            BookmarkField::Database => BookmarkField::User,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookmarkField::Host => "Remote Host",
            BookmarkField::User => "Username",
            BookmarkField::Database => "Database",
        }
    }
}
