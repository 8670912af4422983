//! State

use std::sync::Arc;

use jiff::SignedDuration;

use shopcart_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) session_ttl: SignedDuration,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, session_ttl: SignedDuration) -> Self {
        Self { app, session_ttl }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, session_ttl: SignedDuration) -> Arc<Self> {
        Arc::new(Self::new(app, session_ttl))
    }
}
