use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InvalidReference(String),

    #[error("{0}")]
    Validation(String),

    #[error(
        "Cannot delete department with {count} products. Use force=true to delete anyway."
    )]
    DependentRecords { count: u64 },

    #[error("Service unavailable")]
    ServiceUnavailable,

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    pub fn product_not_found() -> Self {
        CoreError::NotFound("Product not found".to_string())
    }

    pub fn department_not_found() -> Self {
        CoreError::NotFound("Department not found".to_string())
    }

    pub fn duplicate_department_name() -> Self {
        CoreError::Conflict("Department with this name already exists".to_string())
    }

    pub fn unknown_department(department_id: i32) -> Self {
        CoreError::InvalidReference(format!("Department with ID {department_id} not found"))
    }
}
