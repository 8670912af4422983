//! Test support

mod db;

pub(crate) use context::{TEST_PASSWORD, TestContext};
