use serde::{Deserialize, Serialize};

use crate::error::ApiResult;

/// Customer operations as seen by the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Scroll,
    GetById,
    Update,
    History,
}

impl Operation {
    pub fn success_status(self) -> u16 {
        match self {
            Operation::Create => 201,
            Operation::Scroll | Operation::GetById | Operation::Update | Operation::History => 200,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Operation::Create => "Success create customer",
            Operation::Scroll => "Success get customers data",
            Operation::GetById => "Success get customer data",
            Operation::Update => "Success update customer",
            Operation::History => "Success get customer histories",
        }
    }
}

/// Response envelope handed to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn from_result(operation: Operation, result: ApiResult<T>) -> Self {
        match result {
            Ok(data) => Self {
                status: operation.success_status(),
                message: operation.success_message().to_string(),
                data: Some(data),
            },
            Err(err) => Self {
                status: err.status_code(),
                message: err.to_string(),
                data: None,
            },
        }
    }
}

impl ApiResponse<()> {
    /// Acknowledgement without payload, as returned by update.
    pub fn acknowledge(operation: Operation, result: ApiResult<()>) -> Self {
        let mut response = Self::from_result(operation, result);
        response.data = None;
        response
    }
}
