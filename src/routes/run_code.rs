use actix_web::{HttpResponse, Responder, get, post, web};

use crate::config::{ExecutionConfig, ProblemDefinition};
use crate::executor;

use super::{RunCodeRequest, RunCodeResponse};

/// The only language with a working toolchain path.
pub const SUPPORTED_LANGUAGE: &str = "java";

#[post("/api/run-code")]
pub async fn run_code_handler(
    exec_config: web::Data<ExecutionConfig>,
    body: web::Json<RunCodeRequest>,
) -> impl Responder {
    let request = body.into_inner();

    // Rejected before any workspace or subprocess exists
    if request.language != SUPPORTED_LANGUAGE {
        return HttpResponse::Ok().json(RunCodeResponse::err(
            "Only Java is currently supported for JUnit testing",
        ));
    }

    log::info!(
        "running {} test cases for problem {}",
        request.test_cases.len(),
        request.problem_id
    );

    match executor::run_submission(&request.code, &request.test_cases, &exec_config).await {
        Ok(results) => HttpResponse::Ok().json(RunCodeResponse::ok(results)),
        Err(e) => {
            log::error!("execution pipeline failed: {e:#}");
            HttpResponse::Ok().json(RunCodeResponse::err(format!("{e:#}")))
        }
    }
}

#[get("/api/problems/{id}")]
pub async fn get_problem_handler(
    problems: web::Data<Vec<ProblemDefinition>>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    match problems.iter().find(|p| p.id == id) {
        Some(problem) => HttpResponse::Ok().json(problem),
        None => {
            HttpResponse::NotFound().json(RunCodeResponse::err(format!("Unknown problem: {id}")))
        }
    }
}
