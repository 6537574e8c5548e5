use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::db::{Database, DatabaseError, Repository};
use crate::models::*;

const ENTITY: &str = "visit";

pub fn insert_visit(conn: &Connection, visit: &Visit) -> Result<Visit, DatabaseError> {
    conn.execute(
        "INSERT INTO visits (patient_id, doctor_id, visit_type, visit_date, reason_for_visit, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            visit.patient_id,
            visit.doctor_id,
            visit.visit_type,
            encode_date(&visit.visit_date),
            visit.reason_for_visit,
            visit.status,
        ],
    )?;

    let visit_id = u64::try_from(conn.last_insert_rowid())
        .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?;

    Ok(Visit {
        visit_id,
        ..visit.clone()
    })
}

pub fn get_all_visits(conn: &Connection) -> Result<Vec<Visit>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT visit_id, patient_id, doctor_id, visit_type, visit_date, reason_for_visit, status
         FROM visits ORDER BY visit_id",
    )?;

    let rows = stmt.query_map([], read_row)?;

    let mut visits = Vec::new();
    for row in rows {
        visits.push(row_to_visit(row?)?);
    }
    Ok(visits)
}

pub fn get_visit(conn: &Connection, visit_id: u64) -> Result<Visit, DatabaseError> {
    let key = row_key(visit_id)?;
    let row = conn
        .query_row(
            "SELECT visit_id, patient_id, doctor_id, visit_type, visit_date, reason_for_visit, status
             FROM visits WHERE visit_id = ?1",
            params![key],
            read_row,
        )
        .optional()?;

    match row {
        Some(row) => row_to_visit(row),
        None => Err(DatabaseError::not_found(ENTITY, visit_id)),
    }
}

/// Overwrite every mutable column of the row matching `visit.visit_id`.
pub fn update_visit(conn: &Connection, visit: &Visit) -> Result<Visit, DatabaseError> {
    let key = row_key(visit.visit_id)?;
    let changed = conn.execute(
        "UPDATE visits SET patient_id = ?2, doctor_id = ?3, visit_type = ?4, visit_date = ?5,
         reason_for_visit = ?6, status = ?7
         WHERE visit_id = ?1",
        params![
            key,
            visit.patient_id,
            visit.doctor_id,
            visit.visit_type,
            encode_date(&visit.visit_date),
            visit.reason_for_visit,
            visit.status,
        ],
    )?;

    if changed == 0 {
        return Err(DatabaseError::not_found(ENTITY, visit.visit_id));
    }
    Ok(visit.clone())
}

pub fn delete_visit(conn: &Connection, visit_id: u64) -> Result<(), DatabaseError> {
    let key = row_key(visit_id)?;
    let changed = conn.execute("DELETE FROM visits WHERE visit_id = ?1", params![key])?;
    if changed == 0 {
        return Err(DatabaseError::not_found(ENTITY, visit_id));
    }
    Ok(())
}

/// SQLite rowids are signed; an id past `i64::MAX` cannot name a row.
fn row_key(visit_id: u64) -> Result<i64, DatabaseError> {
    i64::try_from(visit_id).map_err(|_| DatabaseError::not_found(ENTITY, visit_id))
}

type VisitRow = (u64, u64, u64, String, String, String, String);

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<VisitRow> {
    Ok((
        row.get::<_, u64>(0)?,
        row.get::<_, u64>(1)?,
        row.get::<_, u64>(2)?,
        row.get::<_, String>(3)?,
        row.get::<_, String>(4)?,
        row.get::<_, String>(5)?,
        row.get::<_, String>(6)?,
    ))
}

fn row_to_visit(row: VisitRow) -> Result<Visit, DatabaseError> {
    let (visit_id, patient_id, doctor_id, visit_type, visit_date, reason_for_visit, status) = row;
    Ok(Visit {
        visit_id,
        patient_id,
        doctor_id,
        visit_type,
        visit_date: DateTime::parse_from_rfc3339(&visit_date)
            .map_err(|e| DatabaseError::ConstraintViolation(format!("visit_date: {e}")))?
            .with_timezone(&Utc),
        reason_for_visit,
        status,
    })
}

fn encode_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Persistence for visits over a shared [`Database`] handle.
#[derive(Clone)]
pub struct VisitRepository {
    db: Database,
}

impl VisitRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl Repository<Visit> for VisitRepository {
    fn insert(&self, entity: &Visit) -> Result<Visit, DatabaseError> {
        self.db.with_conn(|conn| insert_visit(conn, entity))
    }

    fn select_by_id(&self, id: u64) -> Result<Visit, DatabaseError> {
        self.db.with_conn(|conn| get_visit(conn, id))
    }

    fn select_all(&self) -> Result<Vec<Visit>, DatabaseError> {
        self.db.with_conn(get_all_visits)
    }

    fn update_by_id(&self, entity: &Visit) -> Result<Visit, DatabaseError> {
        self.db.with_conn(|conn| update_visit(conn, entity))
    }

    fn delete_by_id(&self, id: u64) -> Result<(), DatabaseError> {
        self.db.with_conn(|conn| delete_visit(conn, id))
    }
}
