use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::Mutex;

use super::dispatch::{DeliveryStatus, SubmissionSink};
use super::domain::{AssessmentError, BuildingType, IntakeStage};
use super::questions::ScoredQuestion;
use super::report::{compose_report, ReportDocument};
use super::scoring::RiskTier;
use super::service::AssessmentService;
use super::session::{BasicInfoUpdate, IntakeSession};
use crate::i18n::{text, Locale};

/// Identifier wrapper for wizard sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("intake-{id:06}"))
}

/// In-memory session front door for the HTTP surface. Sessions live for the
/// process lifetime only; there is deliberately no persistence behind this.
pub struct IntakeGateway<S> {
    sessions: Mutex<HashMap<SessionId, IntakeSession>>,
    service: AssessmentService<S>,
}

impl<S> IntakeGateway<S>
where
    S: SubmissionSink + 'static,
{
    pub fn new(service: AssessmentService<S>) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            service,
        }
    }

    pub fn service(&self) -> &AssessmentService<S> {
        &self.service
    }
}

/// Router builder exposing the wizard over HTTP.
pub fn intake_router<S>(gateway: Arc<IntakeGateway<S>>) -> Router
where
    S: SubmissionSink + 'static,
{
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler::<S>))
        .route(
            "/api/v1/assessment/sessions",
            post(create_session_handler::<S>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id",
            get(session_handler::<S>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/basic-info",
            post(basic_info_handler::<S>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/answers",
            post(answer_handler::<S>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/advance",
            post(advance_handler::<S>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/back",
            post(back_handler::<S>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/reset",
            post(reset_handler::<S>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/submit",
            post(submit_handler::<S>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/report",
            get(report_handler::<S>),
        )
        .with_state(gateway)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CreateSessionRequest {
    #[serde(default)]
    pub(crate) locale: Option<Locale>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRequest {
    pub(crate) question: ScoredQuestion,
    pub(crate) value: i64,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LocaleQuery {
    #[serde(default)]
    pub(crate) locale: Option<Locale>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnswerView {
    pub(crate) question: ScoredQuestion,
    /// `-1` is the wire sentinel for "unanswered"; it never appears in a
    /// finalized record.
    pub(crate) value: i16,
    pub(crate) answered: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct DraftView {
    pub(crate) address: String,
    pub(crate) building_type: Option<BuildingType>,
    pub(crate) building_type_label: Option<String>,
    pub(crate) floor_level: String,
    pub(crate) window_count: String,
    pub(crate) door_count: String,
    pub(crate) heaviest_cat_weight: String,
    pub(crate) answers: Vec<AnswerView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SessionView {
    pub(crate) session_id: SessionId,
    pub(crate) locale: Locale,
    pub(crate) stage: IntakeStage,
    pub(crate) stage_label: String,
    pub(crate) draft: DraftView,
}

fn session_view(session_id: &SessionId, session: &IntakeSession) -> SessionView {
    let locale = session.locale();
    let draft = session.draft();

    let answers = ScoredQuestion::ordered()
        .into_iter()
        .map(|question| {
            let value = draft.answers.get(question);
            AnswerView {
                question,
                value: value.map(i16::from).unwrap_or(-1),
                answered: value.is_some(),
            }
        })
        .collect();

    SessionView {
        session_id: session_id.clone(),
        locale,
        stage: session.stage(),
        stage_label: text(locale, session.stage().label_key()).to_string(),
        draft: DraftView {
            address: draft.address.clone(),
            building_type: draft.building_type,
            building_type_label: draft
                .building_type
                .map(|building| text(locale, building.label_key()).to_string()),
            floor_level: draft.floor_level.clone(),
            window_count: draft.window_count.clone(),
            door_count: draft.door_count.clone(),
            heaviest_cat_weight: draft.heaviest_cat_weight.clone(),
            answers,
        },
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OptionView {
    pub(crate) value: u8,
    pub(crate) label: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionView {
    pub(crate) question: ScoredQuestion,
    pub(crate) payload_key: &'static str,
    pub(crate) title: String,
    pub(crate) minimum: u8,
    pub(crate) flag_threshold: u8,
    pub(crate) options: Vec<OptionView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionCatalogView {
    pub(crate) locale: Locale,
    pub(crate) questions: Vec<QuestionView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmissionReceiptView {
    pub(crate) session_id: SessionId,
    pub(crate) stage: IntakeStage,
    pub(crate) total_score: u8,
    pub(crate) max_score: u8,
    pub(crate) tier: RiskTier,
    pub(crate) tier_label: String,
    pub(crate) delivery: DeliveryStatus,
    pub(crate) notice: NoticeView,
}

#[derive(Debug, Serialize)]
pub(crate) struct NoticeView {
    pub(crate) title: String,
    pub(crate) detail: String,
}

fn not_found_response(session_id: &str) -> Response {
    let payload = json!({
        "error": format!("session {session_id} not found"),
    });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

fn assessment_error_response(locale: Locale, error: &AssessmentError) -> Response {
    let status = match error {
        AssessmentError::MissingBasicFields(_)
        | AssessmentError::UnansweredQuestions(_)
        | AssessmentError::OptionOutOfRange { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentError::NoForwardTransition(_)
        | AssessmentError::NoBackwardTransition
        | AssessmentError::StageMismatch { .. }
        | AssessmentError::AlreadySubmitted => StatusCode::CONFLICT,
    };

    let mut payload = json!({ "error": error.to_string() });
    if let Some(key) = error.notice_key() {
        payload["notice"] = json!({
            "title": text(locale, key),
            "detail": text(locale, &format!("{key}Desc")),
        });
    }

    (status, Json(payload)).into_response()
}

pub(crate) async fn questions_handler<S>(
    State(_gateway): State<Arc<IntakeGateway<S>>>,
    Query(query): Query<LocaleQuery>,
) -> Json<QuestionCatalogView>
where
    S: SubmissionSink + 'static,
{
    let locale = query.locale.unwrap_or_default();

    let questions = ScoredQuestion::ordered()
        .into_iter()
        .map(|question| QuestionView {
            question,
            payload_key: question.payload_key(),
            title: text(locale, question.title_key()).to_string(),
            minimum: question.min_value(),
            flag_threshold: question.flag_threshold(),
            options: question
                .options()
                .iter()
                .map(|option| OptionView {
                    value: option.value,
                    label: text(locale, option.label_key).to_string(),
                })
                .collect(),
        })
        .collect();

    Json(QuestionCatalogView { locale, questions })
}

pub(crate) async fn create_session_handler<S>(
    State(gateway): State<Arc<IntakeGateway<S>>>,
    request: Option<Json<CreateSessionRequest>>,
) -> Response
where
    S: SubmissionSink + 'static,
{
    let locale = request
        .and_then(|Json(request)| request.locale)
        .unwrap_or_default();

    let session_id = next_session_id();
    let session = IntakeSession::new(locale);
    let view = session_view(&session_id, &session);

    let mut sessions = gateway.sessions.lock().await;
    sessions.insert(session_id, session);

    (StatusCode::CREATED, Json(view)).into_response()
}

pub(crate) async fn session_handler<S>(
    State(gateway): State<Arc<IntakeGateway<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SubmissionSink + 'static,
{
    let sessions = gateway.sessions.lock().await;
    let id = SessionId(session_id);
    match sessions.get(&id) {
        Some(session) => (StatusCode::OK, Json(session_view(&id, session))).into_response(),
        None => not_found_response(&id.0),
    }
}

pub(crate) async fn basic_info_handler<S>(
    State(gateway): State<Arc<IntakeGateway<S>>>,
    Path(session_id): Path<String>,
    Json(update): Json<BasicInfoUpdate>,
) -> Response
where
    S: SubmissionSink + 'static,
{
    let mut sessions = gateway.sessions.lock().await;
    let id = SessionId(session_id);
    let Some(session) = sessions.get_mut(&id) else {
        return not_found_response(&id.0);
    };

    match session.update_basic(update) {
        Ok(()) => (StatusCode::OK, Json(session_view(&id, session))).into_response(),
        Err(error) => assessment_error_response(session.locale(), &error),
    }
}

pub(crate) async fn answer_handler<S>(
    State(gateway): State<Arc<IntakeGateway<S>>>,
    Path(session_id): Path<String>,
    Json(request): Json<AnswerRequest>,
) -> Response
where
    S: SubmissionSink + 'static,
{
    let mut sessions = gateway.sessions.lock().await;
    let id = SessionId(session_id);
    let Some(session) = sessions.get_mut(&id) else {
        return not_found_response(&id.0);
    };

    match session.answer(request.question, request.value) {
        Ok(()) => (StatusCode::OK, Json(session_view(&id, session))).into_response(),
        Err(error) => assessment_error_response(session.locale(), &error),
    }
}

pub(crate) async fn advance_handler<S>(
    State(gateway): State<Arc<IntakeGateway<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SubmissionSink + 'static,
{
    let mut sessions = gateway.sessions.lock().await;
    let id = SessionId(session_id);
    let Some(session) = sessions.get_mut(&id) else {
        return not_found_response(&id.0);
    };

    match session.advance() {
        Ok(_) => (StatusCode::OK, Json(session_view(&id, session))).into_response(),
        Err(error) => assessment_error_response(session.locale(), &error),
    }
}

pub(crate) async fn back_handler<S>(
    State(gateway): State<Arc<IntakeGateway<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SubmissionSink + 'static,
{
    let mut sessions = gateway.sessions.lock().await;
    let id = SessionId(session_id);
    let Some(session) = sessions.get_mut(&id) else {
        return not_found_response(&id.0);
    };

    match session.back() {
        Ok(_) => (StatusCode::OK, Json(session_view(&id, session))).into_response(),
        Err(error) => assessment_error_response(session.locale(), &error),
    }
}

pub(crate) async fn reset_handler<S>(
    State(gateway): State<Arc<IntakeGateway<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SubmissionSink + 'static,
{
    let mut sessions = gateway.sessions.lock().await;
    let id = SessionId(session_id);
    let Some(session) = sessions.get_mut(&id) else {
        return not_found_response(&id.0);
    };

    session.reset();
    (StatusCode::OK, Json(session_view(&id, session))).into_response()
}

pub(crate) async fn submit_handler<S>(
    State(gateway): State<Arc<IntakeGateway<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SubmissionSink + 'static,
{
    let mut sessions = gateway.sessions.lock().await;
    let id = SessionId(session_id);
    let Some(session) = sessions.get_mut(&id) else {
        return not_found_response(&id.0);
    };

    let locale = session.locale();
    match gateway.service.submit(session).await {
        Ok(receipt) => {
            let notice = if receipt.delivery.is_delivered() {
                NoticeView {
                    title: text(locale, "toast.success").to_string(),
                    detail: text(locale, "toast.successDesc").to_string(),
                }
            } else {
                NoticeView {
                    title: text(locale, "toast.error").to_string(),
                    detail: text(locale, "toast.errorDesc").to_string(),
                }
            };

            let view = SubmissionReceiptView {
                session_id: id.clone(),
                stage: session.stage(),
                total_score: receipt.total_score,
                max_score: receipt.max_score,
                tier: receipt.tier,
                tier_label: text(locale, receipt.tier.banner_key()).to_string(),
                delivery: receipt.delivery,
                notice,
            };

            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => assessment_error_response(locale, &error),
    }
}

pub(crate) async fn report_handler<S>(
    State(gateway): State<Arc<IntakeGateway<S>>>,
    Path(session_id): Path<String>,
    Query(query): Query<LocaleQuery>,
) -> Response
where
    S: SubmissionSink + 'static,
{
    let sessions = gateway.sessions.lock().await;
    let id = SessionId(session_id);
    let Some(session) = sessions.get(&id) else {
        return not_found_response(&id.0);
    };

    let locale = query.locale.unwrap_or(session.locale());
    match session.finalize(gateway.service.scoring()) {
        Ok(assessment) => {
            let today = Local::now().date_naive();
            let report: ReportDocument =
                compose_report(&assessment, locale, gateway.service.scoring(), today);
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(error) => assessment_error_response(locale, &error),
    }
}
