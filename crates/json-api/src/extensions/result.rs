//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Map any error to a logged internal server error.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn errors_become_internal_server_errors() {
        let result: Result<(), &str> = Err("boom");

        assert!(
            result
                .or_500("failed to do thing")
                .is_err_and(|error| error.code == StatusCode::INTERNAL_SERVER_ERROR),
            "expected 500"
        );
    }

    #[test]
    fn ok_values_pass_through() {
        let result: Result<u8, &str> = Ok(7);

        assert!(matches!(result.or_500("unused"), Ok(7)), "expected value");
    }
}
