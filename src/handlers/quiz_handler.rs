use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::outcome_response,
    models::dto::{
        request::{QuizGenerateRequest, SaveQuizResultsRequest},
        response::{QuizHistoryItem, QuizResultsSavedResponse, QuizSessionDto, SuccessResponse},
    },
};

#[post("/quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<QuizGenerateRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner().into_quiz_request()?;
    let outcome = state.quiz_service.generate_quiz(request).await?;
    Ok(outcome_response(outcome))
}

#[post("/quiz_results")]
pub async fn save_quiz_results(
    state: web::Data<AppState>,
    request: web::Json<SaveQuizResultsRequest>,
) -> Result<HttpResponse, AppError> {
    let session = request.into_inner().into_session()?;
    let session = state.quiz_service.save_results(session).await?;
    Ok(HttpResponse::Created().json(QuizResultsSavedResponse {
        success: true,
        quiz_session_id: session.id,
    }))
}

#[get("/quiz_history")]
pub async fn quiz_history(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let sessions: Vec<QuizHistoryItem> = state
        .quiz_service
        .history()
        .await?
        .into_iter()
        .map(QuizHistoryItem::from)
        .collect();
    Ok(HttpResponse::Ok().json(sessions))
}

#[get("/quiz_results/{id}")]
pub async fn get_quiz_results(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session = state.quiz_service.get_session(&id).await?;
    Ok(HttpResponse::Ok().json(QuizSessionDto::from(session)))
}

#[delete("/quiz_results/{id}")]
pub async fn delete_quiz_results(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.delete_session(&id).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[get("/analytics/quiz_stats")]
pub async fn quiz_stats(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let stats = state.quiz_service.stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}
