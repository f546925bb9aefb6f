use serde::{Deserialize, Serialize};

/// A task row as the table returns it. Field names match the column names,
/// so list/read responses are the raw rows; absent optional columns
/// serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "dueDate")]
    #[sqlx(rename = "dueDate")]
    pub due_date: Option<String>,
}
