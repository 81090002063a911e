use crate::model::ids::{ProjectId, SubtaskId, TaskId};
use crate::repo::kv_store::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Board use-case failure.
#[derive(Debug)]
pub enum ServiceError {
    /// Task text is blank after trim.
    EmptyText,
    /// Project name is blank after trim.
    EmptyName,
    TaskNotFound(TaskId),
    ProjectNotFound(ProjectId),
    SubtaskNotFound {
        project_id: ProjectId,
        subtask_id: SubtaskId,
    },
    /// Write-through failed; in-memory state was restored.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be blank"),
            Self::EmptyName => write!(f, "project name must not be blank"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::SubtaskNotFound {
                project_id,
                subtask_id,
            } => write!(f, "subtask {subtask_id} not found in project {project_id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Trims user-entered text, rejecting blank input with `empty`.
pub(crate) fn non_blank(value: &str, empty: ServiceError) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(empty)
    } else {
        Ok(trimmed.to_string())
    }
}
