use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use marketfront::session::{MemorySessionStore, SessionStore, USER_ID_KEY};
use marketfront::verification::{
    UserVerification, VerificationClient, VerificationFetchError, VerificationStatus,
    VerificationStatusService, VerificationType,
};

fn verified_record(user_id: &str) -> UserVerification {
    UserVerification {
        id: format!("ver-{user_id}"),
        user_id: user_id.to_string(),
        verification_type: VerificationType::LegalEntity,
        status: VerificationStatus::Verified,
        passport_url: None,
        inn_url: Some("https://files.example/inn.pdf".to_string()),
        company_charter_url: None,
        company_name: Some("ООО Топливо-Трейд".to_string()),
        inn: Some("7701234567".to_string()),
        legal_address: None,
        submitted_at: None,
        reviewed_at: None,
    }
}

#[derive(Default)]
struct StubClient {
    record: Option<UserVerification>,
    calls: AtomicUsize,
}

impl VerificationClient for StubClient {
    async fn fetch_for_user(
        &self,
        _user_id: &str,
    ) -> Result<Option<UserVerification>, VerificationFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.record.clone())
    }
}

struct FailingClient;

impl VerificationClient for FailingClient {
    async fn fetch_for_user(
        &self,
        _user_id: &str,
    ) -> Result<Option<UserVerification>, VerificationFetchError> {
        Err(VerificationFetchError::Transport(
            "connection refused".to_string(),
        ))
    }
}

#[tokio::test]
async fn loads_status_for_stored_user() {
    let store = MemorySessionStore::default();
    store.set(USER_ID_KEY, "user-9");

    let client = Arc::new(StubClient {
        record: Some(verified_record("user-9")),
        calls: AtomicUsize::new(0),
    });
    let service = VerificationStatusService::new(client.clone());

    let status = service.load_status(&store).await;
    assert!(status.is_verified());
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn anonymous_visitor_skips_the_fetch_entirely() {
    let store = MemorySessionStore::default();
    let client = Arc::new(StubClient::default());
    let service = VerificationStatusService::new(client.clone());

    let status = service.load_status(&store).await;
    assert_eq!(status, VerificationStatus::NotVerified);
    assert_eq!(client.calls.load(Ordering::SeqCst), 0, "no fetch without id");
}

#[tokio::test]
async fn fetch_failure_degrades_to_default_status() {
    let store = MemorySessionStore::default();
    store.set(USER_ID_KEY, "user-9");

    let service = VerificationStatusService::new(Arc::new(FailingClient));

    let status = service.load_status(&store).await;
    assert_eq!(status, VerificationStatus::NotVerified);
    assert!(service.load(&store).await.is_none());
}

#[tokio::test]
async fn user_without_submission_reads_as_not_verified() {
    let store = MemorySessionStore::default();
    store.set(USER_ID_KEY, "user-1");

    let service = VerificationStatusService::new(Arc::new(StubClient::default()));

    assert_eq!(
        service.load_status(&store).await,
        VerificationStatus::NotVerified
    );
}

#[tokio::test]
async fn rejected_case_surfaces_its_reason() {
    let store = MemorySessionStore::default();
    store.set(USER_ID_KEY, "user-9");

    let mut record = verified_record("user-9");
    record.status = VerificationStatus::Rejected {
        reason: Some("Документы просрочены".to_string()),
    };
    let service = VerificationStatusService::new(Arc::new(StubClient {
        record: Some(record),
        calls: AtomicUsize::new(0),
    }));

    match service.load_status(&store).await {
        VerificationStatus::Rejected { reason } => {
            assert_eq!(reason.as_deref(), Some("Документы просрочены"));
        }
        other => panic!("expected rejected status, got {other:?}"),
    }
}
