mod appointment;
mod optional_date;
mod table_model;

pub use self::appointment::{Appointment, AppointmentId, NewAppointment};
pub use self::optional_date::OptionalDate;

use self::table_model::TableModel;
use crate::error::TrackerError;

// AUTOINCREMENT keeps ids monotonic and never reused, which the display
// ordering relies on as its insertion-order tie-break.
const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS appointments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    applicant_name TEXT,
    reference_number TEXT,
    embassy_or_city TEXT,
    apply_date TEXT,
    appointment_received_date TEXT,
    interview_date TEXT,
    notes TEXT
)";

pub struct Db {
    pub conn: rusqlite::Connection,
}

impl Db {
    /// Open the store at `file_path`, creating the file and the schema on
    /// first use.
    pub fn open(file_path: &str) -> Result<Self, TrackerError> {
        let conn = rusqlite::Connection::open(file_path)?;
        log::debug!("opened appointment store {file_path}");
        Self::init(conn)
    }

    /// An empty throwaway store; used by the tests.
    pub fn open_in_memory() -> Result<Self, TrackerError> {
        Self::init(rusqlite::Connection::open_in_memory()?)
    }

    fn init(conn: rusqlite::Connection) -> Result<Self, TrackerError> {
        conn.execute(SCHEMA_SQL, ())?;
        Ok(Self { conn })
    }

    fn optional_single_row_result<T>(
        result: Result<T, TrackerError>,
    ) -> Result<Option<T>, TrackerError> {
        match result {
            Ok(row) => Ok(Some(row)),
            Err(TrackerError::StorageUnavailable(rusqlite::Error::QueryReturnedNoRows)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn get_by_id<T: TableModel>(&mut self, id: i64) -> Result<Option<T>, TrackerError> {
        let sql = format!("SELECT * FROM {} WHERE id = ? LIMIT 1", T::table_name());
        let result = self.conn.query_row_and_then(&sql, (id,), T::from_row);
        Self::optional_single_row_result(result)
    }

    pub fn get_appointment_by_id(
        &mut self,
        id: AppointmentId,
    ) -> Result<Option<Appointment>, TrackerError> {
        self.get_by_id::<Appointment>(id.0)
    }

    pub fn get_all<T: TableModel>(&mut self) -> Result<Vec<T>, TrackerError> {
        let sql = format!("SELECT * FROM {}", T::table_name());
        let mut stmt = self.conn.prepare(&sql)?;

        let rows = stmt.query_and_then((), T::from_row)?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    pub fn get_all_appointments(&mut self) -> Result<Vec<Appointment>, TrackerError> {
        self.get_all::<Appointment>()
    }

    /// Persist one record and return the id the store assigned to it.
    pub fn insert_appointment(
        &mut self,
        record: &NewAppointment,
    ) -> Result<AppointmentId, TrackerError> {
        Self::insert_into(&self.conn, record)
    }

    /// Persist a batch of records inside a single transaction; either every
    /// record lands or none of them do.
    pub fn insert_all_appointments(
        &mut self,
        records: &[NewAppointment],
    ) -> Result<usize, TrackerError> {
        let tx = self.conn.transaction()?;
        for record in records {
            Self::insert_into(&tx, record)?;
        }
        tx.commit()?;
        Ok(records.len())
    }

    fn insert_into(
        conn: &rusqlite::Connection,
        record: &NewAppointment,
    ) -> Result<AppointmentId, TrackerError> {
        conn.execute(
            "INSERT INTO appointments (applicant_name, reference_number, embassy_or_city, apply_date, appointment_received_date, interview_date, notes) VALUES (:applicant_name, :reference_number, :embassy_or_city, :apply_date, :appointment_received_date, :interview_date, :notes)",
            rusqlite::named_params! {
                ":applicant_name": record.applicant_name,
                ":reference_number": record.reference_number,
                ":embassy_or_city": record.embassy_or_city,
                ":apply_date": record.apply_date,
                ":appointment_received_date": record.appointment_received_date,
                ":interview_date": record.interview_date,
                ":notes": record.notes,
            },
        )?;

        let id = AppointmentId(conn.last_insert_rowid());
        log::debug!("inserted appointment {id}");
        Ok(id)
    }
}
