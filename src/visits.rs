//! Visit service and module wiring.
//!
//! `VisitService` sits between the HTTP controller and the repository.
//! It forwards every call unchanged today; rules that span fields or
//! need caller identity belong here rather than in the controller.

use std::sync::Arc;

use crate::api::types::VisitController;
use crate::db::{Database, DatabaseError, Repository, VisitRepository};
use crate::models::Visit;

pub struct VisitService {
    repo: VisitRepository,
}

impl VisitService {
    pub fn new(repo: VisitRepository) -> Self {
        Self { repo }
    }

    pub fn create_visit(&self, visit: &Visit) -> Result<Visit, DatabaseError> {
        tracing::debug!(patient_id = visit.patient_id, doctor_id = visit.doctor_id, "create visit");
        self.repo.insert(visit)
    }

    pub fn get_all_visits(&self) -> Result<Vec<Visit>, DatabaseError> {
        tracing::debug!("list visits");
        self.repo.select_all()
    }

    pub fn get_visit_by_id(&self, visit_id: u64) -> Result<Visit, DatabaseError> {
        tracing::debug!(visit_id, "get visit");
        self.repo.select_by_id(visit_id)
    }

    pub fn update_visit(&self, visit: &Visit) -> Result<Visit, DatabaseError> {
        tracing::debug!(visit_id = visit.visit_id, "update visit");
        self.repo.update_by_id(visit)
    }

    pub fn delete_visit(&self, visit_id: u64) -> Result<(), DatabaseError> {
        tracing::debug!(visit_id, "delete visit");
        self.repo.delete_by_id(visit_id)
    }
}

/// Build repository → service → controller over the shared handle.
pub fn init_visit_module(db: Database) -> VisitController {
    let repo = VisitRepository::new(db);
    let service = VisitService::new(repo);
    VisitController::new(Arc::new(service))
}
