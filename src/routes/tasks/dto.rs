use serde::{Deserialize, Deserializer, Serialize};

/// Request body for create and update. Every field is optional on purpose:
/// absent fields bind to the statement as NULL, not rejected, so the store
/// decides what a missing value means. The double Option keeps a field sent
/// as JSON `null` apart from one left out of the body: absent stays `None`
/// and is omitted from the echo, while `null` arrives as `Some(None)` and
/// is echoed back as `null`. Both bind as NULL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPayload {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(
        rename = "dueDate",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<Option<String>>,
}

// Flattened views for binding: absent and explicit null both read as None.
impl TaskPayload {
    pub fn title(&self) -> Option<&str> {
        self.title.as_ref().and_then(|value| value.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_ref().and_then(|value| value.as_deref())
    }

    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_ref().and_then(|value| value.as_deref())
    }
}

// A present field deserializes through here and lands in Some, so only a
// field missing from the body is left at the outer None.
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Body of a successful create: the submitted fields echoed back, not the
/// row as stored.
#[derive(Debug, Serialize)]
pub struct TaskCreated {
    pub message: String,
    pub task: TaskPayload,
}
