pub mod error;
pub mod file_utils;
pub mod logger;
pub mod validation;
