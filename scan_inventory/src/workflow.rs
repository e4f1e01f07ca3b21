//! Lookup-or-create workflow for scanned codes.
//!
//! A scan either finds an existing record, which is shown read-only, or
//! leaves the workflow waiting for a title and description. Confirming a
//! valid entry inserts the record and persists it; cancelling drops the
//! pending code without touching the inventory.

use crate::error::{Result, ValidationError};
use crate::models::Record;
use crate::scanner::ScanEvent;
use crate::store::InventoryStore;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkflowState {
    /// No scan pending
    #[default]
    Idle,
    /// `code` was scanned and is not in the inventory yet
    AwaitingDecision { code: String },
}

/// What the caller should show after a scan event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The code is known; display its record
    Found { code: String, record: Record },
    /// The code is unknown; ask for title and description
    NeedsEntry { code: String },
    /// The scanner was closed without a code
    Cancelled,
}

/// Checks a manual entry and returns the record to store.
///
/// Surrounding whitespace is dropped; a field that is empty afterwards is
/// rejected.
pub fn validate_entry(title: &str, description: &str) -> std::result::Result<Record, ValidationError> {
    let title = title.trim();
    let description = description.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(Record::new(title, description))
}

#[derive(Debug, Default)]
pub struct ScanWorkflow {
    state: WorkflowState,
    /// Code of the record on the main display
    current: Option<String>,
}

impl ScanWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// The scanned code waiting for a title and description
    pub fn pending_code(&self) -> Option<&str> {
        match &self.state {
            WorkflowState::AwaitingDecision { code } => Some(code),
            WorkflowState::Idle => None,
        }
    }

    pub fn current_code(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The record on the main display, read fresh from the store
    pub fn current_record<'a>(&self, store: &'a InventoryStore) -> Option<&'a Record> {
        self.current.as_deref().and_then(|code| store.get(code))
    }

    /// Handle one event from the scanner.
    ///
    /// A new scan while an entry is pending replaces the pending code.
    pub fn handle_scan(&mut self, event: ScanEvent, store: &InventoryStore) -> Result<ScanOutcome> {
        let code = match event {
            ScanEvent::Scanned(code) => code,
            ScanEvent::Cancelled => {
                log::debug!("Scan cancelled");
                return Ok(ScanOutcome::Cancelled);
            }
        };
        if code.is_empty() {
            return Err(ValidationError::EmptyCode.into());
        }
        if let Some(pending) = self.pending_code() {
            log::debug!("Abandoning pending entry for {}", pending);
        }

        match store.get(&code) {
            Some(record) => {
                log::info!("Scanned known code {}", code);
                self.state = WorkflowState::Idle;
                self.current = Some(code.clone());
                Ok(ScanOutcome::Found {
                    code,
                    record: record.clone(),
                })
            }
            None => {
                log::info!("Scanned new code {}, waiting for details", code);
                self.state = WorkflowState::AwaitingDecision { code: code.clone() };
                Ok(ScanOutcome::NeedsEntry { code })
            }
        }
    }

    /// Store the entered details for the pending code.
    ///
    /// Returns `Ok(None)` when no code is pending. A validation error leaves
    /// the workflow waiting so the entry can be corrected. A save error is
    /// returned after the record was inserted in memory and the workflow has
    /// gone back to idle.
    pub fn confirm(
        &mut self,
        title: &str,
        description: &str,
        store: &mut InventoryStore,
    ) -> Result<Option<Record>> {
        let code = match &self.state {
            WorkflowState::AwaitingDecision { code } => code.clone(),
            WorkflowState::Idle => return Ok(None),
        };
        let record = validate_entry(title, description)?;

        self.state = WorkflowState::Idle;
        self.current = Some(code.clone());
        store.insert(&code, record.clone())?;
        Ok(Some(record))
    }

    /// Drop the pending code without storing anything
    pub fn cancel(&mut self) {
        if let Some(code) = self.pending_code() {
            log::debug!("Entry for {} cancelled", code);
        }
        self.state = WorkflowState::Idle;
    }

    /// Clear the main display if it shows `code` (after a delete elsewhere)
    pub fn forget(&mut self, code: &str) {
        if self.current.as_deref() == Some(code) {
            self.current = None;
        }
    }

    /// Delete the record on the main display and clear the display.
    ///
    /// Returns the deleted code, or `None` when nothing is displayed.
    pub fn delete_current(&mut self, store: &mut InventoryStore) -> Result<Option<String>> {
        let Some(code) = self.current.take() else {
            return Ok(None);
        };
        store.delete(&code)?;
        Ok(Some(code))
    }
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
