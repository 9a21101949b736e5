// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Upper bound on handler execution before the request is cancelled.
    pub request_timeout: Duration,
}
