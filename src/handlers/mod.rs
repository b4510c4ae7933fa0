pub mod conversation_handler;
pub mod flashcard_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::{web, HttpResponse};

use crate::{models::dto::response::GenerationFailureResponse, services::GenerationOutcome};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_handler::health_check)
        .service(health_handler::health_check_live)
        .service(conversation_handler::chat)
        .service(conversation_handler::history)
        .service(conversation_handler::get_conversation)
        .service(conversation_handler::delete_conversation)
        .service(conversation_handler::search)
        .service(conversation_handler::conversation_stats)
        .service(quiz_handler::generate_quiz)
        .service(quiz_handler::save_quiz_results)
        .service(quiz_handler::quiz_history)
        .service(quiz_handler::get_quiz_results)
        .service(quiz_handler::delete_quiz_results)
        .service(quiz_handler::quiz_stats)
        .service(flashcard_handler::generate_flashcards)
        .service(flashcard_handler::flashcards_history)
        .service(flashcard_handler::get_flashcards)
        .service(flashcard_handler::delete_flashcards)
        .service(flashcard_handler::flashcard_stats);
}

// Unusable model output is still a 200 so the client can show what came back.
fn outcome_response(outcome: GenerationOutcome) -> HttpResponse {
    match outcome {
        Ok(artifact) => HttpResponse::Ok().json(artifact),
        Err(failure) => HttpResponse::Ok().json(GenerationFailureResponse::from(failure)),
    }
}
