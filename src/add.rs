use crate::context::AppContext;
use crate::db::{AppointmentId, NewAppointment, OptionalDate};
use crate::error::TrackerError;

/// Raw field input for one new record, dates still unparsed.
#[derive(Debug, Default)]
pub struct AddFields {
    pub applicant_name: Option<String>,
    pub reference_number: Option<String>,
    pub embassy_or_city: Option<String>,
    pub apply_date: Option<String>,
    pub received_date: Option<String>,
    pub interview_date: Option<String>,
    pub notes: Option<String>,
}

/// Validate the fields and persist a new record. All dates are parsed before
/// anything touches the store, so a validation failure writes nothing.
pub fn add_record(ctx: &mut AppContext, fields: AddFields) -> Result<AppointmentId, TrackerError> {
    let record = NewAppointment {
        applicant_name: clean_text(fields.applicant_name),
        reference_number: clean_text(fields.reference_number),
        embassy_or_city: clean_text(fields.embassy_or_city),
        apply_date: parse_date("apply_date", fields.apply_date.as_deref())?,
        appointment_received_date: parse_date(
            "appointment_received_date",
            fields.received_date.as_deref(),
        )?,
        interview_date: parse_date("interview_date", fields.interview_date.as_deref())?,
        notes: clean_text(fields.notes),
    };

    let id = ctx.db.insert_appointment(&record)?;

    match ctx.db.get_appointment_by_id(id)? {
        Some(stored) => println!(
            "Added {} | interview: {}",
            stored.identify(),
            stored.interview_date
        ),
        None => println!("Added appointment #{id}"),
    }

    Ok(id)
}

// A blank text field means "not supplied", same as leaving the flag off.
fn clean_text(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let v = v.trim();
        if v.is_empty() {
            None
        } else {
            Some(v.to_owned())
        }
    })
}

fn parse_date(field: &'static str, value: Option<&str>) -> Result<OptionalDate, TrackerError> {
    match value {
        None => Ok(OptionalDate(None)),
        Some(raw) => OptionalDate::parse_field(field, raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::db::Db;

    fn test_ctx() -> AppContext {
        AppContext {
            config: AppConfig::default(),
            db: Db::open_in_memory().unwrap(),
        }
    }

    #[test]
    fn add_persists_the_given_fields() {
        let mut ctx = test_ctx();

        let id = add_record(
            &mut ctx,
            AddFields {
                applicant_name: Some("Saeed Ahmad".to_owned()),
                reference_number: Some("1999".to_owned()),
                interview_date: Some("2024-05-10".to_owned()),
                ..AddFields::default()
            },
        )
        .unwrap();

        let stored = ctx.db.get_appointment_by_id(id).unwrap().unwrap();
        assert_eq!(stored.applicant_name.as_deref(), Some("Saeed Ahmad"));
        assert_eq!(stored.reference_number.as_deref(), Some("1999"));
        assert_eq!(stored.interview_date.to_string(), "2024-05-10");
        assert_eq!(stored.apply_date, OptionalDate(None));
    }

    #[test]
    fn add_with_no_fields_at_all_succeeds() {
        let mut ctx = test_ctx();

        let id = add_record(&mut ctx, AddFields::default()).unwrap();
        let stored = ctx.db.get_appointment_by_id(id).unwrap().unwrap();
        assert_eq!(stored.applicant_name, None);
        assert_eq!(stored.interview_date, OptionalDate(None));
    }

    #[test]
    fn bad_date_is_rejected_and_nothing_is_written() {
        let mut ctx = test_ctx();

        let err = add_record(
            &mut ctx,
            AddFields {
                applicant_name: Some("A".to_owned()),
                interview_date: Some("10/05/2024".to_owned()),
                ..AddFields::default()
            },
        )
        .unwrap_err();

        assert!(
            matches!(
                err,
                TrackerError::Validation {
                    field: "interview_date",
                    ..
                }
            ),
            "got {err:?}"
        );
        assert!(
            ctx.db.get_all_appointments().unwrap().is_empty(),
            "a rejected record must not be persisted, not even partially"
        );
    }

    #[test]
    fn blank_text_fields_are_stored_as_null() {
        let mut ctx = test_ctx();

        let id = add_record(
            &mut ctx,
            AddFields {
                applicant_name: Some("   ".to_owned()),
                notes: Some("".to_owned()),
                ..AddFields::default()
            },
        )
        .unwrap();

        let stored = ctx.db.get_appointment_by_id(id).unwrap().unwrap();
        assert_eq!(stored.applicant_name, None);
        assert_eq!(stored.notes, None);
    }
}
