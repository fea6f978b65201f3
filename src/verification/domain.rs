use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of account being verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationType {
    LegalEntity,
    Individual,
    SelfEmployed,
}

impl VerificationType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::LegalEntity => "Юридическое лицо",
            Self::Individual => "Физическое лицо",
            Self::SelfEmployed => "Самозанятый",
        }
    }
}

/// Moderation state of a verification case. The rejection reason lives inside
/// the variant, so "reason without rejection" is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationStatus {
    NotVerified,
    Pending,
    Verified,
    Rejected { reason: Option<String> },
}

impl VerificationStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NotVerified => "Не верифицирован",
            Self::Pending => "На проверке",
            Self::Verified => "Верифицирован",
            Self::Rejected { .. } => "Отклонено",
        }
    }

    pub const fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }
}

impl Default for VerificationStatus {
    fn default() -> Self {
        Self::NotVerified
    }
}

/// A user's verification case with its submitted documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "VerificationWire", into = "VerificationWire")]
pub struct UserVerification {
    pub id: String,
    pub user_id: String,
    pub verification_type: VerificationType,
    pub status: VerificationStatus,
    pub passport_url: Option<String>,
    pub inn_url: Option<String>,
    pub company_charter_url: Option<String>,
    pub company_name: Option<String>,
    pub inn: Option<String>,
    pub legal_address: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum VerificationStatusWire {
    NotVerified,
    Pending,
    Verified,
    Rejected,
}

/// Backend shape: status and `rejectionReason` travel as siblings. The
/// conversions fold them into the tagged [`VerificationStatus`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerificationWire {
    id: String,
    user_id: String,
    verification_type: VerificationType,
    status: VerificationStatusWire,
    #[serde(default)]
    rejection_reason: Option<String>,
    #[serde(default)]
    passport_url: Option<String>,
    #[serde(default)]
    inn_url: Option<String>,
    #[serde(default)]
    company_charter_url: Option<String>,
    #[serde(default)]
    company_name: Option<String>,
    #[serde(default)]
    inn: Option<String>,
    #[serde(default)]
    legal_address: Option<String>,
    #[serde(default)]
    submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    reviewed_at: Option<DateTime<Utc>>,
}

impl From<VerificationWire> for UserVerification {
    fn from(wire: VerificationWire) -> Self {
        let status = match wire.status {
            VerificationStatusWire::NotVerified => VerificationStatus::NotVerified,
            VerificationStatusWire::Pending => VerificationStatus::Pending,
            VerificationStatusWire::Verified => VerificationStatus::Verified,
            VerificationStatusWire::Rejected => VerificationStatus::Rejected {
                reason: wire.rejection_reason,
            },
        };

        Self {
            id: wire.id,
            user_id: wire.user_id,
            verification_type: wire.verification_type,
            status,
            passport_url: wire.passport_url,
            inn_url: wire.inn_url,
            company_charter_url: wire.company_charter_url,
            company_name: wire.company_name,
            inn: wire.inn,
            legal_address: wire.legal_address,
            submitted_at: wire.submitted_at,
            reviewed_at: wire.reviewed_at,
        }
    }
}

impl From<UserVerification> for VerificationWire {
    fn from(record: UserVerification) -> Self {
        let (status, rejection_reason) = match record.status {
            VerificationStatus::NotVerified => (VerificationStatusWire::NotVerified, None),
            VerificationStatus::Pending => (VerificationStatusWire::Pending, None),
            VerificationStatus::Verified => (VerificationStatusWire::Verified, None),
            VerificationStatus::Rejected { reason } => (VerificationStatusWire::Rejected, reason),
        };

        Self {
            id: record.id,
            user_id: record.user_id,
            verification_type: record.verification_type,
            status,
            rejection_reason,
            passport_url: record.passport_url,
            inn_url: record.inn_url,
            company_charter_url: record.company_charter_url,
            company_name: record.company_name,
            inn: record.inn,
            legal_address: record.legal_address,
            submitted_at: record.submitted_at,
            reviewed_at: record.reviewed_at,
        }
    }
}
