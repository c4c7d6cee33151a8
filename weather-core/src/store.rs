//! Ordered, in-memory list of per-city results.
//!
//! At most one record per city, compared case-insensitively. A fresh record for
//! a city that is already present takes over its slot instead of being appended.

use crate::model::{RecordId, WeatherRecord};

/// Where a merged record ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merge {
    Appended { index: usize },
    Replaced { index: usize },
}

#[derive(Debug, Default)]
pub struct ResultStore {
    records: Vec<WeatherRecord>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&WeatherRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn position_of_city(&self, city: &str) -> Option<usize> {
        let wanted = city.to_lowercase();
        self.records
            .iter()
            .position(|r| r.city.to_lowercase() == wanted)
    }

    /// Replace the record for the same city in place, or append a new one.
    pub fn merge(&mut self, record: WeatherRecord) -> Merge {
        match self.position_of_city(&record.city) {
            Some(index) => {
                self.records[index] = record;
                Merge::Replaced { index }
            }
            None => {
                self.records.push(record);
                Merge::Appended {
                    index: self.records.len() - 1,
                }
            }
        }
    }

    /// Returns `false` when no record has this id.
    pub fn set_description(&mut self, id: RecordId, description: impl Into<String>) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.description = description.into();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: RecordId) -> Option<WeatherRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }
}
