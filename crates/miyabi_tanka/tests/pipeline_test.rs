//! Retry controller tests against a scripted generation backend.

use async_trait::async_trait;
use miyabi_core::{
    AttachedImage, GenerationRequest, StructuredCandidate, SystemInstruction, TankaFailureKind,
};
use miyabi_error::{GenerationError, GenerationErrorKind};
use miyabi_interface::TankaModel;
use miyabi_tanka::{MAX_ATTEMPTS, TankaPipeline};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

type Scripted = Result<StructuredCandidate, GenerationErrorKind>;

/// Backend that replays a fixed script and records every request it sees.
struct ScriptedModel {
    script: Mutex<VecDeque<Scripted>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedModel {
    fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl TankaModel for ScriptedModel {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<StructuredCandidate, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());

        let next = self
            .script
            .lock()
            .expect("script lock")
            .pop_front()
            .expect("model called more often than scripted");
        next.map_err(GenerationError::new)
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-v1"
    }
}

fn well_formed() -> StructuredCandidate {
    StructuredCandidate::new(
        ["春の朝", "散歩に出れば", "風薫る", "ポケットの中", "ゆっくり歩く"],
        [
            "はるのあさ",
            "さんぽにでれば",
            "かぜかおる",
            "ぽけっとのなか",
            "ゆっくりあるく",
        ],
    )
}

fn too_short() -> StructuredCandidate {
    StructuredCandidate::new(
        ["春", "散歩", "風", "桜", "歩く"],
        ["はる", "さんぽ", "かぜ", "さくら", "あるく"],
    )
}

fn parenthesized() -> StructuredCandidate {
    let mut candidate = well_formed();
    candidate.line0 = "春（はる）の朝".to_string();
    candidate
}

fn pipeline(script: Vec<Scripted>) -> TankaPipeline<ScriptedModel> {
    TankaPipeline::new(
        ScriptedModel::new(script),
        SystemInstruction::new("あなたは歌人です。"),
    )
}

#[tokio::test]
async fn test_first_attempt_accepted() {
    let pipeline = pipeline(vec![Ok(well_formed())]);

    let result = pipeline
        .generate_tanka("春の朝、散歩に出かけた。", None)
        .await;

    assert!(result.is_success());
    assert_eq!(pipeline.model().calls(), 1);
    let lines = result.lines().expect("lines");
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "春の朝");
}

#[tokio::test]
async fn test_accepted_lines_are_normalized() {
    let pipeline = pipeline(vec![Ok(well_formed())]);

    let result = pipeline.generate_tanka("ポケット", None).await;

    let lines = result.lines().expect("lines");
    assert_eq!(lines[3], "ポケツトの中");
    assert!(lines.iter().all(|line| !line.contains('ッ')));
    // Readings never leak into the result
    assert!(lines.iter().all(|line| line != "ぽけっとのなか"));
}

#[tokio::test]
async fn test_empty_text_makes_no_calls() {
    let pipeline = pipeline(vec![]);

    let result = pipeline.generate_tanka("", None).await;

    assert_eq!(result.failure_kind(), Some(TankaFailureKind::MissingText));
    assert_eq!(
        result.message().as_deref(),
        Some("original text was not provided")
    );
    assert_eq!(pipeline.model().calls(), 0);
}

#[tokio::test]
async fn test_retry_bound_is_exact() {
    let pipeline = pipeline(vec![Ok(too_short()), Ok(too_short()), Ok(too_short())]);

    let result = pipeline.generate_tanka("夏の海", None).await;

    assert_eq!(result.failure_kind(), Some(TankaFailureKind::Malformed));
    assert!(result.lines().is_none());
    assert_eq!(pipeline.model().calls(), MAX_ATTEMPTS);
}

#[tokio::test]
async fn test_recovers_on_final_attempt() {
    let pipeline = pipeline(vec![Ok(parenthesized()), Ok(too_short()), Ok(well_formed())]);

    let result = pipeline.generate_tanka("秋の夜", None).await;

    assert!(result.is_success());
    assert_eq!(pipeline.model().calls(), 3);
}

#[tokio::test]
async fn test_retries_reuse_identical_request() {
    let pipeline = pipeline(vec![Ok(too_short()), Ok(well_formed())]);
    let image = AttachedImage::new("image/jpeg", vec![0xff, 0xd8, 0xff, 0xe0]);

    let result = pipeline.generate_tanka("冬の朝", Some(image)).await;

    assert!(result.is_success());
    let requests = pipeline.model().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
    assert!(requests[0].is_multimodal());
}

#[tokio::test]
async fn test_moderation_short_circuits() {
    // Malformed readings would normally be retried; moderation wins first.
    let pipeline = pipeline(vec![
        Ok(too_short().flagged("暴力的な表現")),
        Ok(well_formed()),
    ]);

    let result = pipeline.generate_tanka("不適切な文章", None).await;

    assert_eq!(result.failure_kind(), Some(TankaFailureKind::Moderation));
    assert_eq!(pipeline.model().calls(), 1);
    let message = result.message().expect("message");
    assert!(!message.contains("暴力的な表現"));
}

#[tokio::test]
async fn test_moderation_after_structural_retry() {
    let pipeline = pipeline(vec![Ok(too_short()), Ok(well_formed().flagged("spam"))]);

    let result = pipeline.generate_tanka("宣伝", None).await;

    assert_eq!(result.failure_kind(), Some(TankaFailureKind::Moderation));
    assert_eq!(pipeline.model().calls(), 2);
}

#[tokio::test]
async fn test_quota_error_is_distinct_and_not_retried() {
    let pipeline = pipeline(vec![Err(GenerationErrorKind::from_status(
        429,
        "Too Many Requests",
    ))]);

    let result = pipeline.generate_tanka("春", None).await;

    assert_eq!(result.failure_kind(), Some(TankaFailureKind::QuotaExceeded));
    assert_eq!(pipeline.model().calls(), 1);
}

#[tokio::test]
async fn test_transport_error_is_generic_and_not_retried() {
    let pipeline = pipeline(vec![Err(GenerationErrorKind::Request(
        "connection reset".to_string(),
    ))]);

    let result = pipeline.generate_tanka("春", None).await;

    assert_eq!(result.failure_kind(), Some(TankaFailureKind::Upstream));
    assert_eq!(pipeline.model().calls(), 1);
}

#[tokio::test]
async fn test_malformed_response_after_retry_is_upstream_failure() {
    let pipeline = pipeline(vec![
        Ok(too_short()),
        Err(GenerationErrorKind::MalformedResponse(
            "missing field `yomi4`".to_string(),
        )),
    ]);

    let result = pipeline.generate_tanka("春", None).await;

    assert_eq!(result.failure_kind(), Some(TankaFailureKind::Upstream));
    assert_eq!(pipeline.model().calls(), 2);
}

#[tokio::test]
async fn test_concurrent_invocations_are_independent() {
    let pipeline = std::sync::Arc::new(pipeline(vec![Ok(well_formed()), Ok(well_formed())]));

    let (a, b) = tokio::join!(
        pipeline.generate_tanka("一", None),
        pipeline.generate_tanka("二", None)
    );

    assert!(a.is_success());
    assert!(b.is_success());
    assert_eq!(pipeline.model().calls(), 2);
}
