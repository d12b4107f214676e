// HTTP API surface outside the auth core

pub mod barbers;
pub mod common;
pub mod feedback;
pub mod validation;

pub use common::ApiError;
