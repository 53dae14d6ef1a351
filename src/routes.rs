mod pages;
mod run_code;

pub use pages::{StaticDir, about_page, index_page, leetcode_page, static_asset};
pub use run_code::{SUPPORTED_LANGUAGE, get_problem_handler, run_code_handler};

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/run-code`. Immutable once deserialized; `problem_id`
/// is informational only and never drives the pipeline.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RunCodeRequest {
    pub language: String,
    pub code: String,
    pub problem_id: String,
    pub test_cases: Vec<TestCase>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TestCase {
    pub input: TestInput,
    pub expected: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct TestInput {
    pub num: i32,
}

/// One entry of the `results` array, in submission order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CaseResult {
    pub passed: bool,
    pub output: String,
    pub execution_time: u64,
}

/// Response envelope for `/api/run-code`. Domain failures still answer with
/// HTTP 200; the `success` flag is the authoritative verdict.
#[derive(Serialize, Deserialize, Debug)]
pub struct RunCodeResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<CaseResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunCodeResponse {
    pub fn ok(results: Vec<CaseResult>) -> Self {
        Self {
            success: true,
            results: Some(results),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            results: None,
            error: Some(message.into()),
        }
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(RunCodeResponse::err(format!("Invalid request: {err}")));
    InternalError::from_response(err, response).into()
}
