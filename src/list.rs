use std::cmp;

use crate::context::AppContext;
use crate::db::{Appointment, Db};
use crate::error::TrackerError;

#[derive(Debug, Default)]
pub struct ListFilter {
    pub search: Option<String>,
    pub with_interview: bool,
}

/// All records in display order: interview date descending, records without
/// an interview date after every dated one, newest record first among ties.
pub fn list_records(db: &mut Db) -> Result<Vec<Appointment>, TrackerError> {
    let mut records = db.get_all_appointments()?;
    records.sort_by(display_order);
    Ok(records)
}

// `None < Some(_)` for the wrapped dates, so the reversed comparison puts
// undated records last. Ids are assigned in insertion order, which makes the
// reversed id comparison a stable newest-first tie-break.
fn display_order(a: &Appointment, b: &Appointment) -> cmp::Ordering {
    b.interview_date
        .cmp(&a.interview_date)
        .then(b.id.cmp(&a.id))
}

fn matches_search(record: &Appointment, needle: &str) -> bool {
    [
        &record.applicant_name,
        &record.reference_number,
        &record.embassy_or_city,
        &record.notes,
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}

pub fn apply_filter(mut records: Vec<Appointment>, filter: &ListFilter) -> Vec<Appointment> {
    if let Some(ref query) = filter.search {
        let needle = query.to_lowercase();
        records.retain(|record| matches_search(record, &needle));
    }

    if filter.with_interview {
        records.retain(|record| record.interview_date.is_some());
    }

    records
}

pub fn print_records(ctx: &mut AppContext, filter: ListFilter) -> Result<(), TrackerError> {
    let records = list_records(&mut ctx.db)?;
    let total = records.len();

    let records = apply_filter(records, &filter);
    if records.is_empty() {
        if total == 0 {
            println!("No entries yet. Add one with the 'add' command.");
        } else {
            println!("No entries match (of {total} total).");
        }
        return Ok(());
    }

    for record in &records {
        println!("{}", record.identify());
        if let Some(ref reference) = record.reference_number {
            println!(" - Reference: {reference}");
        }
        println!(
            " - Applied: {} | Received: {} | Interview: {}",
            record.apply_date, record.appointment_received_date, record.interview_date
        );
        if let Some(days) = record.days_from_apply_to_interview() {
            println!(" - {days} days from application to interview");
        }
        if let Some(ref notes) = record.notes {
            println!(" - Notes: {notes}");
        }
        println!();
    }

    println!("{} of {total} entries shown", records.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{NewAppointment, OptionalDate};

    fn entry(name: &str, interview_date: Option<&str>) -> NewAppointment {
        NewAppointment {
            applicant_name: Some(name.to_owned()),
            interview_date: OptionalDate(interview_date.map(|d| d.parse().unwrap())),
            ..NewAppointment::default()
        }
    }

    fn names(records: &[Appointment]) -> Vec<&str> {
        records
            .iter()
            .map(|r| r.applicant_name.as_deref().unwrap_or("anonymous"))
            .collect()
    }

    #[test]
    fn later_interview_dates_come_first() {
        let mut db = Db::open_in_memory().unwrap();
        db.insert_appointment(&entry("A", Some("2024-03-01"))).unwrap();
        db.insert_appointment(&entry("B", Some("2024-05-10"))).unwrap();

        let records = list_records(&mut db).unwrap();
        assert_eq!(names(&records), ["B", "A"]);
    }

    #[test]
    fn undated_records_always_sort_last() {
        let mut db = Db::open_in_memory().unwrap();
        db.insert_appointment(&entry("undated", None)).unwrap();
        db.insert_appointment(&entry("ancient", Some("1997-06-30"))).unwrap();
        db.insert_appointment(&entry("upcoming", Some("2026-01-15"))).unwrap();
        db.insert_appointment(&NewAppointment::default()).unwrap();

        let records = list_records(&mut db).unwrap();
        assert_eq!(names(&records), ["upcoming", "ancient", "anonymous", "undated"]);

        // Pairwise: every dated record precedes every undated one, and dated
        // records are ordered by descending date.
        for pair in records.windows(2) {
            assert!(
                pair[0].interview_date >= pair[1].interview_date
                    || pair[1].interview_date.is_none(),
                "{} listed before {}",
                pair[0].identify(),
                pair[1].identify()
            );
        }
    }

    #[test]
    fn equal_dates_tie_break_newest_first() {
        let mut db = Db::open_in_memory().unwrap();
        db.insert_appointment(&entry("first", Some("2024-05-10"))).unwrap();
        db.insert_appointment(&entry("second", Some("2024-05-10"))).unwrap();
        db.insert_appointment(&entry("third", Some("2024-05-10"))).unwrap();

        let records = list_records(&mut db).unwrap();
        assert_eq!(names(&records), ["third", "second", "first"]);
    }

    #[test]
    fn search_matches_any_text_field_case_insensitively() {
        let mut db = Db::open_in_memory().unwrap();
        db.insert_appointment(&entry("Saeed Ahmad", None)).unwrap();
        db.insert_appointment(&NewAppointment {
            notes: Some("submitted at the Islamabad embassy".to_owned()),
            ..NewAppointment::default()
        })
        .unwrap();

        let records = list_records(&mut db).unwrap();

        let found = apply_filter(
            records.clone(),
            &ListFilter {
                search: Some("ISLAMABAD".to_owned()),
                ..ListFilter::default()
            },
        );
        assert_eq!(found.len(), 1);
        assert!(found[0].notes.is_some());

        let found = apply_filter(
            records,
            &ListFilter {
                search: Some("nowhere".to_owned()),
                ..ListFilter::default()
            },
        );
        assert!(found.is_empty());
    }

    #[test]
    fn with_interview_filter_drops_undated_records() {
        let mut db = Db::open_in_memory().unwrap();
        db.insert_appointment(&entry("dated", Some("2024-05-10"))).unwrap();
        db.insert_appointment(&entry("undated", None)).unwrap();

        let records = apply_filter(
            list_records(&mut db).unwrap(),
            &ListFilter {
                with_interview: true,
                ..ListFilter::default()
            },
        );
        assert_eq!(names(&records), ["dated"]);
    }
}
