use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{ChatRequest, SearchParams},
        response::{ChatResponse, ConversationDto, SuccessResponse},
    },
};

#[post("/chat")]
pub async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner().into_dialogue_request()?;
    let conversation = state.conversation_service.start_conversation(request).await?;
    Ok(HttpResponse::Ok().json(ChatResponse::from(conversation)))
}

#[get("/history")]
pub async fn history(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let conversations: Vec<ConversationDto> = state
        .conversation_service
        .history()
        .await?
        .into_iter()
        .map(ConversationDto::from)
        .collect();
    Ok(HttpResponse::Ok().json(conversations))
}

#[get("/conversations/{id}")]
pub async fn get_conversation(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let conversation = state.conversation_service.get_conversation(&id).await?;
    Ok(HttpResponse::Ok().json(ConversationDto::from(conversation)))
}

#[delete("/conversations/{id}")]
pub async fn delete_conversation(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.conversation_service.delete_conversation(&id).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[get("/search")]
pub async fn search(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> Result<HttpResponse, AppError> {
    let conversations: Vec<ConversationDto> = state
        .conversation_service
        .search(&params.query)
        .await?
        .into_iter()
        .map(ConversationDto::from)
        .collect();
    Ok(HttpResponse::Ok().json(conversations))
}

#[get("/analytics/stats")]
pub async fn conversation_stats(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let stats = state.conversation_service.stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}
