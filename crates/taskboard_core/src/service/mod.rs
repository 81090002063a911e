//! Board use-case services.
//!
//! # Responsibility
//! - Orchestrate board mutations with write-through persistence.
//! - Keep callers decoupled from storage encoding details.

pub mod error;
pub mod organizer;
pub mod project_service;
pub mod task_service;

pub use error::{ServiceError, ServiceResult};
pub use organizer::Organizer;
pub use project_service::ProjectService;
pub use task_service::TaskService;
