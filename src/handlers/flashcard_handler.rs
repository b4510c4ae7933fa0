use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::outcome_response,
    models::dto::{
        request::FlashcardsRequest,
        response::{FlashcardSetDto, FlashcardSetSummary, SuccessResponse},
    },
};

#[post("/flashcards")]
pub async fn generate_flashcards(
    state: web::Data<AppState>,
    request: web::Json<FlashcardsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner().into_flashcard_request()?;
    let outcome = state.flashcard_service.generate_and_save(request).await?;
    Ok(outcome_response(outcome))
}

#[get("/flashcards_history")]
pub async fn flashcards_history(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let sets: Vec<FlashcardSetSummary> = state
        .flashcard_service
        .history()
        .await?
        .into_iter()
        .map(FlashcardSetSummary::from)
        .collect();
    Ok(HttpResponse::Ok().json(sets))
}

#[get("/flashcards/{id}")]
pub async fn get_flashcards(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let set = state.flashcard_service.get_set(&id).await?;
    Ok(HttpResponse::Ok().json(FlashcardSetDto::from(set)))
}

#[delete("/flashcards/{id}")]
pub async fn delete_flashcards(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.flashcard_service.delete_set(&id).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[get("/analytics/flashcard_stats")]
pub async fn flashcard_stats(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let stats = state.flashcard_service.stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}
