//! Form state and field validation for the create/edit schedule dialogs.
//!
//! Validation runs here, before anything reaches the store: a form either
//! yields a well-typed [`ScheduleDraft`] or a list of per-field errors.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::MERIDIEMS;
use crate::schedule::{Invitation, Schedule, ScheduleDraft};
use crate::time_value::TimeValue;

pub const MIN_NAME_LENGTH: usize = 3;

const NAME_TOO_SHORT: &str = "Name must be at least 3 characters.";
const HOUR_REQUIRED: &str = "Hour must be set.";
const MINUTE_REQUIRED: &str = "Minute must be set.";
const EMAIL_INVALID: &str = "Email address is invalid.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Hour,
    Minute,
    Meridiem,
    Invite,
    Invitation(usize),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Hour => write!(f, "time.hour"),
            Field::Minute => write!(f, "time.minute"),
            Field::Meridiem => write!(f, "time.format"),
            Field::Invite => write!(f, "invite"),
            Field::Invitation(i) => write!(f, "invitations.{}.address", i),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field error found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn validate_name(name: &str) -> Result<&str, FieldError> {
    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(FieldError::new(Field::Name, NAME_TOO_SHORT));
    }
    Ok(name)
}

pub fn validate_hour(hour: Option<&str>) -> Result<&str, FieldError> {
    hour.ok_or_else(|| FieldError::new(Field::Hour, HOUR_REQUIRED))
}

pub fn validate_minute(minute: Option<&str>) -> Result<&str, FieldError> {
    minute.ok_or_else(|| FieldError::new(Field::Minute, MINUTE_REQUIRED))
}

pub fn is_valid_email(address: &str) -> bool {
    !address.starts_with('.') && !address.contains("..") && EMAIL_RE.is_match(address)
}

pub fn validate_email(field: Field, address: &str) -> Result<&str, FieldError> {
    if is_valid_email(address) {
        Ok(address)
    } else {
        Err(FieldError::new(field, EMAIL_INVALID))
    }
}

/// The pending invite box may be empty or hold a valid address.
pub fn validate_invite(invite: &str) -> Result<&str, FieldError> {
    if invite.is_empty() {
        return Ok(invite);
    }
    validate_email(Field::Invite, invite)
}

/// State of the schedule dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleForm {
    pub name: String,
    pub hour: Option<String>,
    pub minute: Option<String>,
    pub meridiem: String,
    pub invitations: Vec<String>,
    /// Address typed but not yet added to `invitations`.
    pub invite: String,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        ScheduleForm {
            name: String::new(),
            hour: None,
            minute: None,
            meridiem: MERIDIEMS[0].to_string(),
            invitations: Vec::new(),
            invite: String::new(),
        }
    }
}

impl ScheduleForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill the form from an existing schedule for editing.
    pub fn from_schedule(schedule: &Schedule) -> Self {
        ScheduleForm {
            name: schedule.name.clone(),
            hour: Some(schedule.time.hour_label()),
            minute: Some(schedule.time.minute_label()),
            meridiem: schedule.time.meridiem().as_str().to_string(),
            invitations: schedule
                .invitations
                .iter()
                .map(|i| i.address.clone())
                .collect(),
            invite: String::new(),
        }
    }

    /// Move the pending invite into the invitation list.
    pub fn add_invitation(&mut self) -> Result<(), FieldError> {
        if self.invite.is_empty() {
            return Err(FieldError::new(Field::Invite, EMAIL_INVALID));
        }
        validate_invite(&self.invite)?;
        self.invitations.push(std::mem::take(&mut self.invite));
        Ok(())
    }

    pub fn remove_invitation(&mut self, index: usize) -> Option<String> {
        (index < self.invitations.len()).then(|| self.invitations.remove(index))
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Check every field. The pending invite is validated but not carried
    /// into the draft.
    pub fn validate(&self, minute_step: u32) -> Result<ScheduleDraft, ValidationErrors> {
        let mut errors = Vec::new();

        let name = validate_name(&self.name).map_err(|e| errors.push(e)).ok();
        let hour = validate_hour(self.hour.as_deref())
            .map_err(|e| errors.push(e))
            .ok();
        let minute = validate_minute(self.minute.as_deref())
            .map_err(|e| errors.push(e))
            .ok();

        let time = match (hour, minute) {
            (Some(hour), Some(minute)) => {
                match TimeValue::parse_with_step(hour, minute, &self.meridiem, minute_step) {
                    Ok(time) => Some(time),
                    Err(err) => {
                        let field = time_field(hour, minute, minute_step);
                        errors.push(FieldError::new(field, err.to_string()));
                        None
                    }
                }
            }
            _ => None,
        };

        let invitations: Vec<Invitation> = self
            .invitations
            .iter()
            .enumerate()
            .filter_map(|(i, address)| {
                validate_email(Field::Invitation(i), address)
                    .map_err(|e| errors.push(e))
                    .ok()
                    .map(Invitation::new)
            })
            .collect();

        if let Err(e) = validate_invite(&self.invite) {
            errors.push(e);
        }

        match (name, time) {
            (Some(name), Some(time)) if errors.is_empty() => Ok(ScheduleDraft {
                name: name.to_string(),
                time,
                invitations,
            }),
            _ => Err(ValidationErrors(errors)),
        }
    }
}

/// Pick the field a time parse error belongs to.
fn time_field(hour: &str, minute: &str, step: u32) -> Field {
    if TimeValue::parse_with_step(hour, "00", "AM", step).is_err() {
        Field::Hour
    } else if TimeValue::parse_with_step("12", minute, "AM", step).is_err() {
        Field::Minute
    } else {
        Field::Meridiem
    }
}
