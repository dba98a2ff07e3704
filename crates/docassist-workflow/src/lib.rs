//! Consultation workflow for docassist
//!
//! Chains the transcriber, chat responder, text extractor and summarizer for
//! one `/full-workflow` request. Each collaborator sits behind a trait so the
//! orchestration can run against in-process fakes.

#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

mod collaborator;
mod error;
mod prompt;
mod workflow;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
};
use docassist_core::{ExtractUploads, UploadRejection};
use http::StatusCode;

pub use collaborator::{BoxError, ChatResponder, Summarizer, TextExtractor, Transcriber};
pub use error::WorkflowError;
pub use prompt::clinical_prompt;
pub use workflow::{Workflow, WorkflowResult};

/// Wire the workflow to the capability servers
pub fn build_workflow(
    transcriber: Arc<stt::Server>,
    llm: &Arc<docassist_llm::Server>,
    extractor: Arc<ocr::Server>,
) -> Arc<Workflow> {
    Arc::new(Workflow::new(
        transcriber,
        Arc::clone(llm) as Arc<dyn ChatResponder>,
        extractor,
        Arc::clone(llm) as Arc<dyn Summarizer>,
    ))
}

/// Create the endpoint router for the full workflow
pub fn endpoint_router() -> Router<Arc<Workflow>> {
    Router::new().route("/full-workflow", post(full_workflow))
}

/// Handle `POST /full-workflow` (multipart `file`, optional `image`)
async fn full_workflow(
    State(workflow): State<Arc<Workflow>>,
    uploads: Result<ExtractUploads, UploadRejection>,
) -> Response {
    let uploads = match uploads {
        Ok(ExtractUploads(uploads)) => uploads,
        // A body that is not a form carries no file at all
        Err(rejection) if rejection.status() == StatusCode::UNSUPPORTED_MEDIA_TYPE => {
            return WorkflowError::MissingFile.into_response();
        }
        Err(rejection) => return rejection.into_response(),
    };

    match workflow.run(uploads).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => e.into_response(),
    }
}
