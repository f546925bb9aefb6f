pub mod dto;
pub mod model;
pub mod routes;

pub use dto::{TaskCreated, TaskPayload};
pub use model::Task;
