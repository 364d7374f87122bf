//! In-memory schedule store keyed by day.
//!
//! Each day's schedules are kept as an immutable `Arc<[Schedule]>` ordered by
//! time of day, ties in insertion order. Writes build a new list and swap it
//! in, so a list or [`StoreSnapshot`] handed out earlier never changes.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;

use crate::error::{DaygridError, DaygridResult};
use crate::schedule::{NewSchedule, Schedule, SchedulePatch};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LENGTH: usize = 16;
const MAX_ID_ATTEMPTS: usize = 8;

/// Source of schedule ids.
pub trait IdGenerator {
    fn generate(&mut self) -> String;
}

/// 16 random characters from `[0-9a-z]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&mut self) -> String {
        let mut rng = rand::rng();
        (0..ID_LENGTH)
            .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
            .collect()
    }
}

#[derive(Debug, Clone)]
struct Entry {
    date_id: String,
    seq: u64,
}

#[derive(Debug)]
pub struct ScheduleStore<G = RandomIds> {
    by_date: HashMap<String, Arc<[Schedule]>>,
    entries: HashMap<String, Entry>,
    next_seq: u64,
    ids: G,
}

impl ScheduleStore<RandomIds> {
    /// Empty store for a new session.
    pub fn init() -> Self {
        Self::with_id_generator(RandomIds)
    }
}

impl Default for ScheduleStore<RandomIds> {
    fn default() -> Self {
        Self::init()
    }
}

impl<G: IdGenerator> ScheduleStore<G> {
    pub fn with_id_generator(ids: G) -> Self {
        ScheduleStore {
            by_date: HashMap::new(),
            entries: HashMap::new(),
            next_seq: 0,
            ids,
        }
    }

    /// Create a schedule on `input.date_id`. Any date id is accepted.
    pub fn add(&mut self, input: NewSchedule) -> DaygridResult<Schedule> {
        let id = self.fresh_id()?;
        let seq = self.next_seq;
        self.next_seq += 1;

        let schedule = Schedule {
            id: id.clone(),
            date_id: input.date_id,
            name: input.name,
            time: input.time,
            invitations: input.invitations,
        };

        let mut list = self.list_for_date(&schedule.date_id).to_vec();
        // New entries carry the highest sequence, so they go after equal times.
        let pos = list.partition_point(|s| s.time <= schedule.time);
        list.insert(pos, schedule.clone());

        self.entries.insert(
            id,
            Entry {
                date_id: schedule.date_id.clone(),
                seq,
            },
        );
        self.by_date.insert(schedule.date_id.clone(), list.into());

        tracing::debug!(id = %schedule.id, date = %schedule.date_id, "added schedule");
        Ok(schedule)
    }

    /// Replace the patched fields of a schedule. `id` and `date_id` are kept.
    pub fn update(&mut self, id: &str, patch: SchedulePatch) -> DaygridResult<Schedule> {
        let date_id = self.date_of(id)?;
        let mut list = self.list_for_date(&date_id).to_vec();
        let idx = list
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| DaygridError::NotFound(id.to_string()))?;

        if patch.is_empty() {
            return Ok(list.swap_remove(idx));
        }

        let time_changed = list[idx].apply(patch);
        let updated = list[idx].clone();

        if time_changed {
            list.sort_by_key(|s| (s.time, self.seq_of(&s.id)));
        }
        self.by_date.insert(date_id, list.into());

        tracing::debug!(id, time_changed, "updated schedule");
        Ok(updated)
    }

    /// Delete a schedule. Days left without schedules are dropped.
    pub fn remove(&mut self, id: &str) -> DaygridResult<Schedule> {
        let date_id = self.date_of(id)?;
        let mut list = self.list_for_date(&date_id).to_vec();
        let idx = list
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| DaygridError::NotFound(id.to_string()))?;
        let removed = list.remove(idx);

        self.entries.remove(id);
        if list.is_empty() {
            self.by_date.remove(&date_id);
        } else {
            self.by_date.insert(date_id, list.into());
        }

        tracing::debug!(id, "removed schedule");
        Ok(removed)
    }

    /// Schedules for a day in chronological order; empty if none.
    pub fn list_for_date(&self, date_id: &str) -> Arc<[Schedule]> {
        self.by_date
            .get(date_id)
            .cloned()
            .unwrap_or_else(|| Arc::from(Vec::new()))
    }

    /// Look up a schedule for editing.
    pub fn get(&self, id: &str) -> Option<Schedule> {
        let entry = self.entries.get(id)?;
        self.by_date
            .get(&entry.date_id)?
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    pub fn count_for_date(&self, date_id: &str) -> usize {
        self.by_date.get(date_id).map_or(0, |list| list.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            by_date: self.by_date.clone(),
        }
    }

    fn fresh_id(&mut self) -> DaygridResult<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.generate();
            if !self.entries.contains_key(&id) {
                return Ok(id);
            }
            tracing::warn!(id = %id, "schedule id collision, retrying");
        }
        Err(DaygridError::IdCollision(MAX_ID_ATTEMPTS))
    }

    fn date_of(&self, id: &str) -> DaygridResult<String> {
        self.entries
            .get(id)
            .map(|e| e.date_id.clone())
            .ok_or_else(|| DaygridError::NotFound(id.to_string()))
    }

    fn seq_of(&self, id: &str) -> u64 {
        self.entries.get(id).map_or(u64::MAX, |e| e.seq)
    }
}

/// Read-only view of the store at one point in time.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    by_date: HashMap<String, Arc<[Schedule]>>,
}

impl StoreSnapshot {
    pub fn list_for_date(&self, date_id: &str) -> Arc<[Schedule]> {
        self.by_date
            .get(date_id)
            .cloned()
            .unwrap_or_else(|| Arc::from(Vec::new()))
    }

    /// Day keys that have at least one schedule, sorted.
    pub fn date_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.by_date.keys().map(String::as_str).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.by_date.values().map(|list| list.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
