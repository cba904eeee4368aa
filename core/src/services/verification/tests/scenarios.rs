//! End-to-end lifecycle scenarios over the mock store

use chrono::Duration;

use crate::domain::entities::user::AccountStatus;
use crate::errors::{DomainError, VerificationError};

use super::mocks::{t0, Harness, SUBJECT};

#[tokio::test]
async fn scenario_issue_creates_pending_record() {
    let h = Harness::new(&["135790"]);

    h.service.send_verification(SUBJECT).await.unwrap();

    let record = h.records.get(SUBJECT).await.unwrap();
    assert_eq!(record.issued_at, t0());
    assert_eq!(record.expires_at, t0() + Duration::hours(24));
    assert_eq!(record.attempt_count, 0);
    assert!(!record.consumed);
}

#[tokio::test]
async fn scenario_verify_just_before_expiry_succeeds() {
    let h = Harness::new(&["135790"]);
    h.service.send_verification(SUBJECT).await.unwrap();
    h.clock.set(t0() + Duration::hours(23) + Duration::minutes(59));

    h.service.verify(SUBJECT, "135790").await.unwrap();

    assert!(h.records.get(SUBJECT).await.unwrap().consumed);
    assert_eq!(h.user().await.account_status, AccountStatus::Active);
}

#[tokio::test]
async fn scenario_verify_after_expiry_fails() {
    let h = Harness::new(&["135790"]);
    h.service.send_verification(SUBJECT).await.unwrap();
    h.clock.set(t0() + Duration::hours(24) + Duration::minutes(1));

    let result = h.service.verify(SUBJECT, "135790").await;

    assert!(matches!(
        result,
        Err(DomainError::Verification(VerificationError::Expired))
    ));
    assert_eq!(h.user().await.account_status, AccountStatus::Pending);
}

#[tokio::test]
async fn scenario_three_wrong_codes_then_correct() {
    let h = Harness::new(&["135790"]);
    h.service.send_verification(SUBJECT).await.unwrap();

    for expected in 1..=3 {
        let result = h.service.verify(SUBJECT, "999999").await;
        assert!(matches!(
            result,
            Err(DomainError::Verification(VerificationError::IncorrectCode { attempts })) if attempts == expected
        ));
    }

    let outcome = h.service.verify(SUBJECT, "135790").await.unwrap();
    assert_eq!(outcome.attempt_count, 4);
    assert_eq!(h.records.get(SUBJECT).await.unwrap().attempt_count, 4);
}

#[tokio::test]
async fn scenario_resend_invalidates_old_code() {
    let h = Harness::new(&["135790", "246801"]);
    h.service.send_verification(SUBJECT).await.unwrap();
    h.clock.set(t0() + Duration::hours(1));

    h.service.resend_verification(SUBJECT).await.unwrap();

    let result = h.service.verify(SUBJECT, "135790").await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(VerificationError::IncorrectCode { attempts: 1 }))
    ));

    h.service.verify(SUBJECT, "246801").await.unwrap();
}

#[tokio::test]
async fn scenario_issue_then_verify_succeeds_exactly_once() {
    let h = Harness::new(&["135790"]);
    h.service.send_verification(SUBJECT).await.unwrap();

    let first = h.service.verify(SUBJECT, "135790").await;
    let second = h.service.verify(SUBJECT, "135790").await;

    assert!(first.is_ok());
    assert!(matches!(
        second,
        Err(DomainError::Verification(VerificationError::AlreadyVerified))
    ));
}
