use serde::Deserialize;

/// Request body for creating a task. Any owner supplied by the caller is
/// ignored; ownership is stamped from the authenticated user.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
}

/// Allow-listed update body: the title is the only mutable field.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
}
