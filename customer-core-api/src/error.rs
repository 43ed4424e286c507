use thiserror::Error;

pub const USER_NOT_FOUND: &str = "User is not found";
pub const CUSTOMER_NOT_FOUND: &str = "Customer is not found";
pub const CUSTOMER_ALREADY_EXISTS: &str = "Customer already exist";
pub const PHONE_OR_EMAIL_USED: &str = "Phone or email already used";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    /// Phone or email collision while creating a customer
    #[error("{0}")]
    Conflict(String),

    /// Phone or email collision with another customer while updating
    #[error("{0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl ApiError {
    pub fn user_not_found() -> Self {
        ApiError::NotFound(USER_NOT_FOUND.to_string())
    }

    pub fn customer_not_found() -> Self {
        ApiError::NotFound(CUSTOMER_NOT_FOUND.to_string())
    }

    pub fn duplicate_on_create() -> Self {
        ApiError::Conflict(CUSTOMER_ALREADY_EXISTS.to_string())
    }

    pub fn duplicate_on_update() -> Self {
        ApiError::Forbidden(PHONE_OR_EMAIL_USED.to_string())
    }

    /// Transport status for this error kind.
    ///
    /// A create-time duplicate is reported as 400 while an update-time
    /// duplicate is reported as 403.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::ValidationError(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Conflict(_) => 400,
            ApiError::Forbidden(_) => 403,
            ApiError::InternalError(_) | ApiError::DatabaseError(_) => 500,
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(errors.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
