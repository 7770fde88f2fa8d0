use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    ErrorResponse, HealthResponse, MatchCandidateRequest, MatchJobRequest, MatchRunResponse,
};
use crate::services::{MatchService, Storage};

/// Application state shared across all handlers
pub struct AppState<S: Storage> {
    pub service: Arc<MatchService<S>>,
}

impl<S: Storage> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

/// Configure all match-related routes
pub fn configure<S: Storage + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check::<S>))
        .route("/matches/candidate", web::post().to(match_candidate::<S>))
        .route("/matches/job", web::post().to(match_job::<S>))
        .route("/matches/sweep", web::post().to(run_sweep::<S>));
}

/// Health check endpoint
async fn health_check<S: Storage + 'static>(state: web::Data<AppState<S>>) -> impl Responder {
    let storage_healthy = state.service.health_check().await.unwrap_or(false);

    let status = if storage_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Run the matching pass for one candidate and persist the results
///
/// POST /api/v1/matches/candidate
///
/// Request body:
/// ```json
/// {
///   "candidateId": 42
/// }
/// ```
async fn match_candidate<S: Storage + 'static>(
    state: web::Data<AppState<S>>,
    req: web::Json<MatchCandidateRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!("Running candidate matching for {}", req.candidate_id);

    let results = match state.service.match_candidate_to_jobs(req.candidate_id).await {
        Ok(results) => results,
        Err(e) => {
            tracing::error!("Matching failed for candidate {}: {}", req.candidate_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Matching failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    match state.service.create_matches_from_results(&results).await {
        Ok(matches) => HttpResponse::Ok().json(MatchRunResponse {
            total_scored: results.len(),
            matches,
        }),
        Err(e) => {
            tracing::error!(
                "Failed to persist matches for candidate {}: {}",
                req.candidate_id,
                e
            );
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to persist matches".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Run the matching pass for one job and persist the results
///
/// POST /api/v1/matches/job
///
/// Request body:
/// ```json
/// {
///   "jobId": 7
/// }
/// ```
async fn match_job<S: Storage + 'static>(
    state: web::Data<AppState<S>>,
    req: web::Json<MatchJobRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!("Running job matching for {}", req.job_id);

    let results = match state.service.match_jobs_to_candidates(req.job_id).await {
        Ok(results) => results,
        Err(e) => {
            tracing::error!("Matching failed for job {}: {}", req.job_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Matching failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    match state.service.create_matches_from_results(&results).await {
        Ok(matches) => HttpResponse::Ok().json(MatchRunResponse {
            total_scored: results.len(),
            matches,
        }),
        Err(e) => {
            tracing::error!("Failed to persist matches for job {}: {}", req.job_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to persist matches".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Trigger the batch matching sweep over all candidates
///
/// POST /api/v1/matches/sweep
async fn run_sweep<S: Storage + 'static>(state: web::Data<AppState<S>>) -> impl Responder {
    match state.service.run_sweep().await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => {
            tracing::error!("Matching sweep failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Sweep failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
