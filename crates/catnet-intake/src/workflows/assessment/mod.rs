//! Cat home safety assessment workflow: the three-stage intake wizard, the
//! linear scoring engine, the one-way submission dispatch, and the multi-page
//! report composer handed to the external export pipeline.

pub mod dispatch;
pub mod domain;
pub mod export;
pub mod questions;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use dispatch::{
    DeliveryStatus, DispatchError, SubmissionPayload, SubmissionSink, WebhookSink,
};
pub use domain::{
    AssessmentError, BasicField, BuildingType, CompletedAnswers, IntakeDraft, IntakeStage,
    ScoredAnswers,
};
pub use export::{
    export_document, DocumentAssembler, ExportError, ExportedDocument, PageImage, PageRasterizer,
};
pub use questions::{QuestionOption, ScoredQuestion};
pub use report::{compose_report, export_file_name, ReportDocument, ReportPage};
pub use router::{intake_router, IntakeGateway, SessionId};
pub use scoring::{total_score, RiskTier, ScoringConfig};
pub use service::{AssessmentService, SubmissionReceipt};
pub use session::{BasicInfoUpdate, FinalizedAssessment, IntakeSession};
