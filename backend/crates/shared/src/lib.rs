//! Shared Kernel
//!
//! Vocabulary shared by every crate of the gateway:
//! - the unified [`error::app_error::AppError`] and its result alias
//! - the [`error::kind::ErrorKind`] classification mapped onto HTTP statuses

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}

pub use error::app_error::{AppError, AppResult};
pub use error::kind::ErrorKind;
