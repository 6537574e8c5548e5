use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A patient's visit to a doctor.
///
/// `visit_id` is assigned by the store on insert. Request bodies may omit it,
/// in which case it decodes as `0` (never a stored id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    #[serde(default)]
    pub visit_id: u64,
    pub patient_id: u64,
    pub doctor_id: u64,
    pub visit_type: String,
    pub visit_date: DateTime<Utc>,
    pub reason_for_visit: String,
    pub status: String,
}
