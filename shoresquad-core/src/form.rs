//! Event creation form validation.

use chrono::{NaiveDate, NaiveTime};

use crate::constants::MIN_FIELD_LEN;
use crate::distance::Coordinates;
use crate::error::{FieldError, FormField};
use crate::event::EventDraft;

/// Raw text submitted through the "create event" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub description: String,
}

impl EventForm {
    /// Validate every field, collecting one error per invalid field.
    ///
    /// `today` is the earliest acceptable date; `coordinates` is stamped on
    /// the draft as-is.
    pub fn validate(
        &self,
        today: NaiveDate,
        coordinates: Coordinates,
    ) -> Result<EventDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.chars().count() < MIN_FIELD_LEN {
            errors.push(field_error(
                FormField::Name,
                format!("Event name must be at least {MIN_FIELD_LEN} characters"),
            ));
        }

        let location = self.location.trim();
        if location.chars().count() < MIN_FIELD_LEN {
            errors.push(field_error(
                FormField::Location,
                format!("Location must be at least {MIN_FIELD_LEN} characters"),
            ));
        }

        let date = match parse_date(self.date.trim(), today) {
            Ok(date) => Some(date),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let time = match parse_time(self.time.trim()) {
            Ok(time) => time,
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let description = self.description.trim();

        match date {
            Some(date) if errors.is_empty() => Ok(EventDraft {
                name: name.to_string(),
                location: location.to_string(),
                date,
                time,
                description: (!description.is_empty()).then(|| description.to_string()),
                coordinates,
            }),
            _ => Err(errors),
        }
    }
}

fn field_error(field: FormField, message: impl Into<String>) -> FieldError {
    FieldError {
        field,
        message: message.into(),
    }
}

fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate, FieldError> {
    if input.is_empty() {
        return Err(field_error(FormField::Date, "Please choose a date for the event"));
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        field_error(
            FormField::Date,
            format!("Invalid date '{}'. Expected YYYY-MM-DD", input),
        )
    })?;

    if date < today {
        return Err(field_error(FormField::Date, "Event date cannot be in the past"));
    }

    Ok(date)
}

fn parse_time(input: &str) -> Result<Option<NaiveTime>, FieldError> {
    if input.is_empty() {
        return Ok(None);
    }

    NaiveTime::parse_from_str(input, "%H:%M").map(Some).map_err(|_| {
        field_error(
            FormField::Time,
            format!("Invalid time '{}'. Expected HH:MM", input),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn origin() -> Coordinates {
        Coordinates::new(1.381497, 103.955574)
    }

    fn valid_form() -> EventForm {
        EventForm {
            name: "Cleanup Day".to_string(),
            location: "Pier 1".to_string(),
            date: "2026-10-15".to_string(),
            time: "09:30".to_string(),
            description: String::new(),
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<FormField> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn accepts_valid_form() {
        let draft = valid_form().validate(today(), origin()).unwrap();
        assert_eq!(draft.name, "Cleanup Day");
        assert_eq!(draft.location, "Pier 1");
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2026, 10, 15).unwrap());
        assert_eq!(draft.time, NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(draft.description, None);
        assert_eq!(draft.coordinates, origin());
    }

    #[test]
    fn trims_before_measuring() {
        let mut form = valid_form();
        form.name = "  AB  ".to_string();
        let errors = form.validate(today(), origin()).unwrap_err();
        assert_eq!(fields(&errors), vec![FormField::Name]);
    }

    #[test]
    fn rejects_short_name() {
        let mut form = valid_form();
        form.name = "AB".to_string();
        let errors = form.validate(today(), origin()).unwrap_err();
        assert_eq!(errors[0].message, "Event name must be at least 3 characters");
    }

    #[test]
    fn rejects_past_date() {
        let mut form = valid_form();
        form.date = "2026-10-13".to_string();
        let errors = form.validate(today(), origin()).unwrap_err();
        assert_eq!(fields(&errors), vec![FormField::Date]);
        assert_eq!(errors[0].message, "Event date cannot be in the past");
    }

    #[test]
    fn accepts_today() {
        let mut form = valid_form();
        form.date = "2026-10-14".to_string();
        assert!(form.validate(today(), origin()).is_ok());
    }

    #[test]
    fn reports_every_bad_field() {
        let form = EventForm {
            name: "x".to_string(),
            location: "".to_string(),
            date: "".to_string(),
            time: "9am".to_string(),
            description: String::new(),
        };
        let errors = form.validate(today(), origin()).unwrap_err();
        assert_eq!(
            fields(&errors),
            vec![FormField::Name, FormField::Location, FormField::Date, FormField::Time]
        );
    }

    #[test]
    fn keeps_description_and_optional_time() {
        let mut form = valid_form();
        form.time = String::new();
        form.description = "  Bring gloves  ".to_string();
        let draft = form.validate(today(), origin()).unwrap();
        assert_eq!(draft.time, None);
        assert_eq!(draft.description.as_deref(), Some("Bring gloves"));
    }
}
