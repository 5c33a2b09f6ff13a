use std::{sync::Arc, time::Duration};

use folio_contact::{
    ContactSession, DRAFT_ERROR_RESET_AFTER, DRAFT_FAILURE_MESSAGE, Field, GenerateOutcome,
    Status, SubmitOutcome, Tone,
};
use tokio::sync::Semaphore;

mod helpers;

#[tokio::test]
async fn test_subject_line_is_split_from_body() {
    let session = helpers::filled_session().await;
    let drafter = helpers::FakeDrafter::replying("Subject: Quick question\nHello there, following up.");

    let outcome = session.generate(Some(drafter.clone())).await;
    assert_eq!(outcome, GenerateOutcome::Drafted);

    session
        .read(|form| {
            assert_eq!(form.draft().subject, "Quick question");
            assert_eq!(form.draft().message, "Hello there, following up.");
            assert_eq!(form.draft().name, "Ada Lovelace");
            assert!(!form.is_generating());
            assert_eq!(form.status(), Status::Idle);
        })
        .await;
}

#[tokio::test]
async fn test_text_without_subject_keeps_existing_subject() {
    let session = helpers::filled_session().await;
    let drafter = helpers::FakeDrafter::replying("Dear Sidarth,\n\nI enjoyed your portfolio.");

    session.generate(Some(drafter)).await;

    session
        .read(|form| {
            assert_eq!(form.draft().subject, "Engines");
            assert_eq!(
                form.draft().message,
                "Dear Sidarth,\n\nI enjoyed your portfolio."
            );
        })
        .await;
}

#[tokio::test]
async fn test_request_carries_purpose_tone_and_sender() {
    let session = helpers::filled_session().await;
    session.update(|form| form.set_tone(Tone::Detailed)).await;
    let drafter = helpers::FakeDrafter::replying("Subject: Hi\nBody");

    session.generate(Some(drafter.clone())).await;

    let requests = drafter.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].purpose, "ask about the analytical engine");
    assert_eq!(requests[0].tone, Tone::Detailed);
    assert_eq!(requests[0].sender_name, "Ada Lovelace");
    assert_eq!(requests[0].sender_email, "ada@example.com");
}

#[tokio::test]
async fn test_anonymous_sender_uses_placeholders() {
    let session = ContactSession::new();
    session.update(|form| form.set_purpose("say hello")).await;
    let drafter = helpers::FakeDrafter::replying("Hello!");

    session.generate(Some(drafter.clone())).await;

    let request = &drafter.requests()[0];
    assert_eq!(request.sender_name, "Visitor");
    assert_eq!(request.sender_email, "visitor@example.com");
    assert_eq!(request.tone, Tone::Professional);
}

#[tokio::test]
async fn test_blank_purpose_skips_the_call() {
    let session = helpers::filled_session().await;
    session.update(|form| form.set_purpose("  ")).await;
    let drafter = helpers::FakeDrafter::replying("unused");

    let outcome = session.generate(Some(drafter.clone())).await;

    assert_eq!(outcome, GenerateOutcome::Skipped);
    assert!(drafter.requests().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_remote_failure_leaves_fields_and_clears_banner() {
    let session = helpers::filled_session().await;

    let outcome = session
        .generate(Some(helpers::FakeDrafter::failing()))
        .await;
    assert_eq!(
        outcome,
        GenerateOutcome::Failed(DRAFT_FAILURE_MESSAGE.to_owned())
    );

    session
        .read(|form| {
            assert_eq!(form.status(), Status::Error);
            assert_eq!(form.message(), Some(DRAFT_FAILURE_MESSAGE));
            assert_eq!(form.draft().subject, "Engines");
            assert_eq!(form.draft().message, "Shall we compute?");
            assert!(!form.is_generating());
        })
        .await;

    tokio::time::sleep(DRAFT_ERROR_RESET_AFTER + Duration::from_millis(1)).await;
    assert_eq!(session.read(|form| form.status()).await, Status::Idle);
}

#[tokio::test]
async fn test_missing_assistant_fails_like_a_remote_error() {
    let session = helpers::filled_session().await;

    let outcome = session.generate(None).await;

    assert_eq!(
        outcome,
        GenerateOutcome::Failed(DRAFT_FAILURE_MESSAGE.to_owned())
    );
    session
        .read(|form| {
            assert_eq!(form.status(), Status::Error);
            assert_eq!(form.draft().message, "Shall we compute?");
        })
        .await;
}

#[tokio::test]
async fn test_draft_can_be_regenerated_before_submitting() {
    let session = helpers::filled_session().await;

    session
        .generate(Some(helpers::FakeDrafter::replying("Subject: One\nFirst")))
        .await;
    session
        .update(|form| form.set_purpose("try a friendlier version"))
        .await;
    session
        .generate(Some(helpers::FakeDrafter::replying("Subject: Two\nSecond")))
        .await;

    session
        .read(|form| {
            assert_eq!(form.draft().subject, "Two");
            assert_eq!(form.draft().get(Field::Message), "Second");
        })
        .await;
}

#[tokio::test]
async fn test_submit_is_refused_while_draft_is_running() {
    let session = helpers::filled_session().await;
    let gate = Arc::new(Semaphore::new(0));
    let drafter = helpers::FakeDrafter::gated("Subject: Stale\nStale body", gate.clone());
    let deliverer = helpers::FakeDeliverer::accepting();

    let generating = {
        let session = session.clone();
        let drafter: Arc<dyn folio_contact::DraftEmail> = drafter.clone();
        tokio::spawn(async move { session.generate(Some(drafter)).await })
    };

    while drafter.requests().is_empty() {
        tokio::task::yield_now().await;
    }
    assert!(session.read(|form| form.is_generating()).await);

    let outcome = session.submit(deliverer.clone(), "Owner").await;
    assert_eq!(outcome, SubmitOutcome::Busy);
    assert!(deliverer.sent().is_empty());

    gate.add_permits(1);
    assert_eq!(generating.await.unwrap(), GenerateOutcome::Drafted);

    session
        .read(|form| {
            assert_eq!(form.status(), Status::Idle);
            assert_eq!(form.draft().name, "Ada Lovelace");
            assert_eq!(form.draft().subject, "Stale");
            assert_eq!(form.draft().message, "Stale body");
        })
        .await;

    let outcome = session.submit(deliverer.clone(), "Owner").await;
    assert_eq!(outcome, SubmitOutcome::Delivered);
    session
        .read(|form| {
            assert_eq!(form.draft().subject, "");
            assert_eq!(form.draft().message, "");
        })
        .await;
}
