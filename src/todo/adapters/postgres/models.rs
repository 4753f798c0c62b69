//! Diesel row models for todo persistence.

use super::schema::todos;
use diesel::prelude::*;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoRow {
    /// Store-assigned record identifier.
    pub id: i64,
    /// Record title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Urgency on the 1 to 5 scale.
    pub priority: i32,
    /// Completion flag.
    pub complete: bool,
    /// Owning user identifier.
    pub owner_id: i64,
}

/// Insert model for todo records; the store assigns the id.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Record title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Urgency on the 1 to 5 scale.
    pub priority: i32,
    /// Completion flag.
    pub complete: bool,
    /// Owning user identifier.
    pub owner_id: i64,
}

/// Changeset overwriting the mutable fields of a todo record.
///
/// `treat_none_as_null` makes a `None` description persist NULL rather than
/// leaving the stored value untouched: an update is a full overwrite.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todos)]
#[diesel(treat_none_as_null = true)]
pub struct TodoChangeset {
    /// Record title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Urgency on the 1 to 5 scale.
    pub priority: i32,
    /// Completion flag.
    pub complete: bool,
}
