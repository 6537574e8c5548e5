//! Shared types for the HTTP layer.

use std::sync::Arc;

use crate::visits::VisitService;

/// Router state for the visit endpoints.
///
/// Holds only the service; the database handle lives underneath it.
#[derive(Clone)]
pub struct VisitController {
    pub service: Arc<VisitService>,
}

impl VisitController {
    pub fn new(service: Arc<VisitService>) -> Self {
        Self { service }
    }
}
