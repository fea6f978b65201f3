pub mod domain;
pub mod service;

pub use domain::{UserVerification, VerificationStatus, VerificationType};
pub use service::{VerificationClient, VerificationFetchError, VerificationStatusService};
