//! Cart Handlers

pub(crate) mod add;
pub(crate) mod clear;
pub(crate) mod get;
