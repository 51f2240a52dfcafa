use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Duplicate payment method id: {0}")]
    DuplicatePaymentMethod(String),
    #[error("Duplicate order id: {0}")]
    DuplicateOrder(String),
    #[error("Not all orders were paid after allocation. Unpaid orders: {unpaid:?}")]
    AllocationInfeasible { unpaid: Vec<String> },
}

pub type Result<T> = std::result::Result<T, PaymentError>;
