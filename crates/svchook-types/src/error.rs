use std::fmt;

use thiserror::Error;

use crate::service::ServiceId;

/// The step an error was raised from.
///
/// `Display` yields the human-readable step name that appears in every
/// error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ConnectToApi,
    GetRequest,
    PostRequest,
    ConnectToDatabase,
    SelectPositiveBalance,
    InsertDefaultClient,
    GetBalance,
    CloseDatabase,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::ConnectToApi => "Connection to API",
            Operation::GetRequest => "Request to API",
            Operation::PostRequest => "Post request to API",
            Operation::ConnectToDatabase => "Connecting to the database",
            Operation::SelectPositiveBalance => {
                "Selection client with positive balance from the database"
            }
            Operation::InsertDefaultClient => "Insertion information to the database",
            Operation::GetBalance => "Getting client's balance from the database",
            Operation::CloseDatabase => "Closing the database",
        };
        f.write_str(name)
    }
}

/// Violations of the directory's business rules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BusinessRuleError {
    #[error("there is nothing to hook")]
    NothingToHook,

    #[error("all services are hooked, there are {hooked} of them")]
    AllServicesHooked { hooked: usize },

    #[error("the service {service_id} is lost during finding the cost")]
    ServiceCostMissing { service_id: ServiceId },

    #[error("status code is {actual}, expected {expected}")]
    UnexpectedStatus { expected: u16, actual: u16 },
}

/// Every failure the harness surfaces. Nothing is retried or recovered.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("An error occurred while accessing the service \"{operation}\": {message}")]
    Transport { operation: Operation, message: String },

    #[error("An error occurred while accessing the service \"{operation}\": {message}")]
    DataAccess { operation: Operation, message: String },

    #[error("An error occurred while accessing the service \"{operation}\": got empty response: {message}")]
    EmptyResult { operation: Operation, message: String },

    #[error(transparent)]
    BusinessRule(#[from] BusinessRuleError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl HarnessError {
    pub fn transport(operation: Operation, err: impl fmt::Display) -> Self {
        Self::Transport {
            operation,
            message: err.to_string(),
        }
    }

    pub fn data_access(operation: Operation, err: impl fmt::Display) -> Self {
        Self::DataAccess {
            operation,
            message: err.to_string(),
        }
    }

    pub fn empty(operation: Operation, message: impl Into<String>) -> Self {
        Self::EmptyResult {
            operation,
            message: message.into(),
        }
    }

    /// The failing step, when the error is tied to one.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Transport { operation, .. }
            | Self::DataAccess { operation, .. }
            | Self::EmptyResult { operation, .. } => Some(*operation),
            Self::BusinessRule(_) | Self::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_names_operation() {
        let err = HarnessError::transport(Operation::ConnectToApi, "connection refused");
        assert_eq!(
            err.to_string(),
            "An error occurred while accessing the service \"Connection to API\": connection refused"
        );
        assert_eq!(err.operation(), Some(Operation::ConnectToApi));
    }

    #[test]
    fn test_business_rule_display() {
        let err: HarnessError = BusinessRuleError::AllServicesHooked { hooked: 3 }.into();
        assert!(err.to_string().contains("all services are hooked"));
        assert!(err.to_string().contains('3'));
        assert_eq!(err.operation(), None);

        let err = BusinessRuleError::UnexpectedStatus {
            expected: 202,
            actual: 200,
        };
        assert_eq!(err.to_string(), "status code is 200, expected 202");
    }

    #[test]
    fn test_empty_result_display() {
        let err = HarnessError::empty(Operation::GetBalance, "client 4 does not exist");
        assert!(err.to_string().contains("Getting client's balance from the database"));
        assert!(err.to_string().ends_with("client 4 does not exist"));
    }
}
