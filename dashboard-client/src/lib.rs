//! Data source adapter and the fetch → normalize → commit pipeline.

mod dashboard;
mod error;
mod source;

pub use dashboard::{Dashboard, SelectionOutcome};
pub use error::FetchError;
pub use source::{HttpPatientSource, PatientSource};
