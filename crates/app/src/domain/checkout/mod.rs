//! Checkout

pub mod errors;
pub mod pricing;
pub mod service;

pub use errors::CheckoutServiceError;
pub use service::*;
