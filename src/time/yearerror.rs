use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum YearError {
    #[error("year {received} is outside the supported range {}..={}", i32::MIN, i32::MAX)]
    OutOfRange { received: i64 },
}
