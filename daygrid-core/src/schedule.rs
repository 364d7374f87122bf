//! Schedule entries attached to calendar days.

use serde::Serialize;

use crate::time_value::TimeValue;

/// An invited email address. Invitations are recorded, never sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Invitation {
    pub address: String,
}

impl Invitation {
    pub fn new(address: impl Into<String>) -> Self {
        Invitation {
            address: address.into(),
        }
    }
}

/// A named, timed entry on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub id: String,
    /// Key of the day this schedule belongs to; fixed after creation.
    pub date_id: String,
    pub name: String,
    pub time: TimeValue,
    pub invitations: Vec<Invitation>,
}

/// Validated form output, not yet bound to a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDraft {
    pub name: String,
    pub time: TimeValue,
    pub invitations: Vec<Invitation>,
}

impl ScheduleDraft {
    pub fn for_date(self, date_id: impl Into<String>) -> NewSchedule {
        NewSchedule {
            date_id: date_id.into(),
            name: self.name,
            time: self.time,
            invitations: self.invitations,
        }
    }

    /// Patch replacing every editable field.
    pub fn into_patch(self) -> SchedulePatch {
        SchedulePatch {
            name: Some(self.name),
            time: Some(self.time),
            invitations: Some(self.invitations),
        }
    }

    /// "<name> at <time>", the description shown in notices.
    pub fn summary(&self) -> String {
        format!("{} at {}", self.name, self.time)
    }
}

/// Input to `ScheduleStore::add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSchedule {
    pub date_id: String,
    pub name: String,
    pub time: TimeValue,
    pub invitations: Vec<Invitation>,
}

/// Fields to replace on an existing schedule. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulePatch {
    pub name: Option<String>,
    pub time: Option<TimeValue>,
    pub invitations: Option<Vec<Invitation>>,
}

impl SchedulePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.time.is_none() && self.invitations.is_none()
    }
}

impl Schedule {
    pub fn summary(&self) -> String {
        format!("{} at {}", self.name, self.time)
    }

    /// Apply a patch. Returns true when the time changed.
    pub(crate) fn apply(&mut self, patch: SchedulePatch) -> bool {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(invitations) = patch.invitations {
            self.invitations = invitations;
        }
        match patch.time {
            Some(time) if time != self.time => {
                self.time = time;
                true
            }
            _ => false,
        }
    }
}
