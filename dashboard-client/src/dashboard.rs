use dashboard_core::{
    fallback, find_patient_by_name, lookup::PatientSummary, roster, DashboardConfig,
    PatientRecord, PatientSession, PatientView,
};
use dashboard_payload::{normalize_patient, normalize_patients};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::PatientSource;

/// Result of one selection run.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// The record is now the displayed patient.
    Committed(PatientRecord),
    /// A later selection started before this one finished; nothing written.
    Superseded,
}

/// Owns the displayed-patient slot and drives the fetch pipeline.
pub struct Dashboard<S> {
    source: S,
    config: DashboardConfig,
    session: RwLock<PatientSession>,
}

impl<S: PatientSource> Dashboard<S> {
    pub fn new(source: S, config: DashboardConfig) -> Self {
        Self {
            source,
            config,
            session: RwLock::new(PatientSession::new()),
        }
    }

    /// Fetch and normalize the patient list. Any fetch failure yields the
    /// fallback list.
    pub async fn load_patients(&self) -> Vec<PatientRecord> {
        match self.source.fetch_all_patients().await {
            Ok(raw) => normalize_patients(&raw),
            Err(err) => {
                warn!(error = %err, "{}; using fallback patients", err.user_message());
                fallback::fallback_patients()
            }
        }
    }

    /// Patient list rows; the built-in roster when the list is empty.
    pub async fn roster(&self) -> Vec<PatientSummary> {
        roster(&self.load_patients().await)
    }

    /// Select a patient by name. Only the most recent selection may write
    /// the displayed record.
    pub async fn select_patient(&self, name: &str) -> SelectionOutcome {
        let ticket = self.session.write().await.begin_selection(name);

        let patients = self.load_patients().await;
        let record = find_patient_by_name(&patients, &ticket.name);

        let mut session = self.session.write().await;
        if session.commit(&ticket, record.clone()) {
            info!(requested = %ticket.name, shown = %record.name, "patient selected");
            SelectionOutcome::Committed(record)
        } else {
            warn!(
                requested = %ticket.name,
                generation = ticket.generation,
                "discarding result of superseded selection"
            );
            SelectionOutcome::Superseded
        }
    }

    pub async fn select_default_patient(&self) -> SelectionOutcome {
        let name = self.config.default_patient_name.clone();
        self.select_patient(&name).await
    }

    /// Single-record endpoint. Failures and a missing record are `None`.
    pub async fn fetch_patient_by_id(&self, id: &str) -> Option<PatientRecord> {
        match self.source.fetch_patient(id).await {
            Ok(Some(raw)) => Some(normalize_patient(&raw)),
            Ok(None) => None,
            Err(err) => {
                warn!(%id, error = %err, "could not fetch patient");
                None
            }
        }
    }

    pub async fn current_patient(&self) -> PatientRecord {
        self.session.read().await.current().clone()
    }

    pub async fn current_view(&self) -> PatientView {
        PatientView::from_record(self.session.read().await.current())
    }

    pub async fn check_connection(&self) -> bool {
        self.source.check_connection().await
    }
}
