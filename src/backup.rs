use crate::db::{Appointment, Db, NewAppointment};
use crate::error::TrackerError;
use crate::list;

/// Column set of a backup file. Order matters: it is the serde field order of
/// `Appointment`, and restore rejects any file whose header deviates from it.
pub const CSV_HEADER: [&str; 8] = [
    "id",
    "applicant_name",
    "reference_number",
    "embassy_or_city",
    "apply_date",
    "appointment_received_date",
    "interview_date",
    "notes",
];

/// Serialize every record to CSV, in display order (the same ordering the
/// `list` command shows). Dates become `YYYY-MM-DD`, absent fields become
/// empty cells. An empty store still yields the header row.
pub fn export_csv(db: &mut Db) -> Result<Vec<u8>, TrackerError> {
    let records = list::list_records(db)?;

    let mut bytes = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut bytes);
        writer.write_record(CSV_HEADER)?;
        for record in &records {
            writer.serialize(record)?;
        }
        writer.flush().map_err(csv::Error::from)?;
    }

    log::info!("exported {} records as CSV", records.len());
    Ok(bytes)
}

/// Load a previously exported backup, recreating every row as a new record.
/// Ids in the file are ignored; the store assigns fresh ones. The whole load
/// is one transaction, so a malformed row leaves the store exactly as it was.
pub fn restore_from_csv(db: &mut Db, bytes: &[u8]) -> Result<usize, TrackerError> {
    let mut reader = csv::Reader::from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|err| TrackerError::MalformedInput(format!("unreadable header row: {err}")))?;
    if headers.iter().collect::<Vec<_>>() != CSV_HEADER {
        return Err(TrackerError::MalformedInput(format!(
            "unexpected columns {:?}, expected {:?}",
            headers.iter().collect::<Vec<_>>(),
            CSV_HEADER
        )));
    }

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<Appointment>().enumerate() {
        let record = row
            .map_err(|err| TrackerError::MalformedInput(format!("record {}: {err}", idx + 1)))?;
        records.push(NewAppointment::from(record));
    }

    let count = db.insert_all_appointments(&records)?;
    log::info!("restored {count} records from a CSV backup");
    Ok(count)
}
