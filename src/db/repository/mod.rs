//! Repository layer — entity-scoped database operations.
//!
//! Each entity gets free functions over a borrowed `Connection` plus a
//! handle-owning repository type implementing [`Repository`].

mod visit;

use super::DatabaseError;

/// Base repository operations for any entity keyed by an integer id
pub trait Repository<T> {
    fn insert(&self, entity: &T) -> Result<T, DatabaseError>;
    fn select_all(&self) -> Result<Vec<T>, DatabaseError>;
    fn select_by_id(&self, id: u64) -> Result<T, DatabaseError>;
    fn update_by_id(&self, entity: &T) -> Result<T, DatabaseError>;
    fn delete_by_id(&self, id: u64) -> Result<(), DatabaseError>;
}

pub use visit::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::db::sqlite::open_memory_database;
    use crate::db::Database;
    use crate::models::*;
    use rusqlite::Connection;

    fn test_db() -> Connection {
        open_memory_database().unwrap()
    }

    fn make_visit(patient_id: u64, status: &str) -> Visit {
        Visit {
            visit_id: 0,
            patient_id,
            doctor_id: 2,
            visit_type: "initial".into(),
            visit_date: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
            reason_for_visit: "checkup".into(),
            status: status.into(),
        }
    }

    #[test]
    fn visit_insert_assigns_increasing_ids() {
        let conn = test_db();
        let first = insert_visit(&conn, &make_visit(1, "scheduled")).unwrap();
        let second = insert_visit(&conn, &make_visit(1, "scheduled")).unwrap();
        assert_eq!(first.visit_id, 1);
        assert!(second.visit_id > first.visit_id);
    }

    #[test]
    fn visit_insert_ignores_supplied_id() {
        let conn = test_db();
        let mut visit = make_visit(1, "scheduled");
        visit.visit_id = 42;
        let stored = insert_visit(&conn, &visit).unwrap();
        assert_eq!(stored.visit_id, 1);
        assert!(get_visit(&conn, 42).unwrap_err().is_not_found());
    }

    #[test]
    fn visit_insert_and_retrieve() {
        let conn = test_db();
        let stored = insert_visit(&conn, &make_visit(7, "scheduled")).unwrap();
        let fetched = get_visit(&conn, stored.visit_id).unwrap();
        assert_eq!(fetched, stored);
        assert_eq!(fetched.patient_id, 7);
        assert_eq!(
            fetched.visit_date,
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn visit_get_missing_is_not_found() {
        let conn = test_db();
        let err = get_visit(&conn, 99).unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::NotFound { ref entity_type, ref id }
                if entity_type == "visit" && id == "99"
        ));
    }

    #[test]
    fn visit_list_empty_table() {
        let conn = test_db();
        assert!(get_all_visits(&conn).unwrap().is_empty());
    }

    #[test]
    fn visit_list_allows_same_patient_same_date() {
        let conn = test_db();
        insert_visit(&conn, &make_visit(1, "scheduled")).unwrap();
        insert_visit(&conn, &make_visit(1, "scheduled")).unwrap();
        insert_visit(&conn, &make_visit(3, "completed")).unwrap();
        let all = get_all_visits(&conn).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all.iter().filter(|v| v.patient_id == 1).count(), 2);
    }

    #[test]
    fn visit_update_overwrites_all_fields() {
        let conn = test_db();
        let stored = insert_visit(&conn, &make_visit(1, "scheduled")).unwrap();

        let replacement = Visit {
            visit_id: stored.visit_id,
            patient_id: 5,
            doctor_id: 9,
            visit_type: "follow-up".into(),
            visit_date: Utc.with_ymd_and_hms(2024, 6, 2, 8, 30, 0).unwrap(),
            reason_for_visit: "lab review".into(),
            status: "completed".into(),
        };
        update_visit(&conn, &replacement).unwrap();

        assert_eq!(get_visit(&conn, stored.visit_id).unwrap(), replacement);
    }

    #[test]
    fn visit_update_missing_is_not_found() {
        let conn = test_db();
        let mut visit = make_visit(1, "completed");
        visit.visit_id = 12;
        assert!(update_visit(&conn, &visit).unwrap_err().is_not_found());
        assert!(get_all_visits(&conn).unwrap().is_empty());
    }

    #[test]
    fn visit_delete_then_second_delete_is_not_found() {
        let conn = test_db();
        let stored = insert_visit(&conn, &make_visit(1, "scheduled")).unwrap();
        delete_visit(&conn, stored.visit_id).unwrap();
        assert!(get_visit(&conn, stored.visit_id).unwrap_err().is_not_found());
        assert!(delete_visit(&conn, stored.visit_id).unwrap_err().is_not_found());
    }

    #[test]
    fn visit_ids_not_reused_after_delete() {
        let conn = test_db();
        let first = insert_visit(&conn, &make_visit(1, "scheduled")).unwrap();
        delete_visit(&conn, first.visit_id).unwrap();
        let second = insert_visit(&conn, &make_visit(1, "scheduled")).unwrap();
        assert!(second.visit_id > first.visit_id);
    }

    #[test]
    fn visit_ids_past_rowid_range_are_not_found() {
        let conn = test_db();
        insert_visit(&conn, &make_visit(1, "scheduled")).unwrap();
        let too_big = i64::MAX as u64 + 1;

        assert!(get_visit(&conn, too_big).unwrap_err().is_not_found());
        assert!(delete_visit(&conn, u64::MAX).unwrap_err().is_not_found());
        let mut visit = make_visit(1, "completed");
        visit.visit_id = too_big;
        assert!(update_visit(&conn, &visit).unwrap_err().is_not_found());
        assert_eq!(get_all_visits(&conn).unwrap().len(), 1);
    }

    #[test]
    fn visit_malformed_stored_date_is_constraint_violation() {
        let conn = test_db();
        conn.execute(
            "INSERT INTO visits (patient_id, doctor_id, visit_type, visit_date, reason_for_visit, status)
             VALUES (1, 2, 'initial', 'not-a-date', 'checkup', 'scheduled')",
            [],
        )
        .unwrap();
        let err = get_visit(&conn, 1).unwrap_err();
        assert!(matches!(err, DatabaseError::ConstraintViolation(_)));
    }

    #[test]
    fn visit_repository_round_trips_through_handle() {
        let repo = VisitRepository::new(Database::open_in_memory().unwrap());
        let stored = repo.insert(&make_visit(1, "scheduled")).unwrap();
        assert_eq!(repo.select_by_id(stored.visit_id).unwrap(), stored);
        assert_eq!(repo.select_all().unwrap().len(), 1);

        let mut changed = stored.clone();
        changed.status = "cancelled".into();
        assert_eq!(repo.update_by_id(&changed).unwrap().status, "cancelled");

        repo.delete_by_id(stored.visit_id).unwrap();
        assert!(repo.select_all().unwrap().is_empty());
    }
}
