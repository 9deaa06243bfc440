use std::fmt;

use rusqlite::types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};

use super::optional_date::OptionalDate;
use super::table_model::TableModel;
use crate::error::TrackerError;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct AppointmentId(pub i64);

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ToSql for AppointmentId {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

impl FromSql for AppointmentId {
    fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        <i64 as FromSql>::column_result(value).map(AppointmentId)
    }
}

/// One stored appointment record. Everything except the id is optional; the
/// serde field order is also the column order of CSV backups.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: AppointmentId,

    pub applicant_name: Option<String>,
    pub reference_number: Option<String>,
    pub embassy_or_city: Option<String>,

    pub apply_date: OptionalDate,
    pub appointment_received_date: OptionalDate,
    pub interview_date: OptionalDate,

    pub notes: Option<String>,
}

impl Appointment {
    pub fn identify(&self) -> String {
        let name = self.applicant_name.as_deref().unwrap_or("anonymous");
        match self.embassy_or_city {
            Some(ref place) => format!("#{} {name} ({place})", self.id),
            None => format!("#{} {name}", self.id),
        }
    }

    /// Days from handing in the application to the interview, when both
    /// dates are known.
    pub fn days_from_apply_to_interview(&self) -> Option<i64> {
        let applied = self.apply_date.0?;
        let interview = self.interview_date.0?;
        Some(interview.signed_duration_since(applied).num_days())
    }
}

impl TableModel for Appointment {
    fn table_name() -> &'static str {
        "appointments"
    }

    fn from_row(row: &rusqlite::Row) -> Result<Self, TrackerError> {
        let result = Self {
            id: row.get("id")?,
            applicant_name: row.get("applicant_name")?,
            reference_number: row.get("reference_number")?,
            embassy_or_city: row.get("embassy_or_city")?,
            apply_date: row.get("apply_date")?,
            appointment_received_date: row.get("appointment_received_date")?,
            interview_date: row.get("interview_date")?,
            notes: row.get("notes")?,
        };
        Ok(result)
    }
}

/// Input for a not-yet-persisted record; the store assigns the id.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub applicant_name: Option<String>,
    pub reference_number: Option<String>,
    pub embassy_or_city: Option<String>,

    pub apply_date: OptionalDate,
    pub appointment_received_date: OptionalDate,
    pub interview_date: OptionalDate,

    pub notes: Option<String>,
}

impl From<Appointment> for NewAppointment {
    fn from(record: Appointment) -> Self {
        Self {
            applicant_name: record.applicant_name,
            reference_number: record.reference_number,
            embassy_or_city: record.embassy_or_city,
            apply_date: record.apply_date,
            appointment_received_date: record.appointment_received_date,
            interview_date: record.interview_date,
            notes: record.notes,
        }
    }
}
