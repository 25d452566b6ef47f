//! The "currently displayed patient" slot.
//!
//! Every selection takes a ticket carrying a generation number. A result is
//! committed only if its ticket is still the newest one, so a slow response
//! for an earlier selection can never overwrite a later one.

use serde::{Deserialize, Serialize};

use crate::{fallback, PatientRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionTicket {
    pub generation: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatientSession {
    generation: u64,
    selected_name: Option<String>,
    current: PatientRecord,
}

impl Default for PatientSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientSession {
    /// Starts out showing the default record.
    pub fn new() -> Self {
        Self {
            generation: 0,
            selected_name: None,
            current: fallback::default_patient(),
        }
    }

    /// Register a new selection, superseding any in flight.
    pub fn begin_selection(&mut self, name: &str) -> SelectionTicket {
        self.generation += 1;
        self.selected_name = Some(name.to_string());
        SelectionTicket {
            generation: self.generation,
            name: name.to_string(),
        }
    }

    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Replace the displayed record if `ticket` is still the newest
    /// selection. Returns whether the record was written.
    pub fn commit(&mut self, ticket: &SelectionTicket, record: PatientRecord) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.current = record;
        true
    }

    pub fn current(&self) -> &PatientRecord {
        &self.current
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected_name.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
