//! Prompt construction for every artifact type.
//!
//! Pure functions: a request goes in, the system and user prompts plus the
//! sampling parameters for the completion call come out.

use crate::{
    constants::prompts::{
        DIALOGUE_CLOSING, DIALOGUE_MAX_TOKENS, DIALOGUE_TEMPERATURE, FLASHCARD_FORMAT,
        FLASHCARD_GENERATOR_PREAMBLE, FLASHCARD_MAX_TOKENS, FLASHCARD_TEMPERATURE,
        QUIZ_GENERATOR_PREAMBLE, QUIZ_MAX_TOKENS, QUIZ_QUESTION_FORMAT, QUIZ_TEMPERATURE,
    },
    errors::GenerationError,
    models::domain::{
        DialogueMode, DialogueRequest, DialogueStyle, FlashcardRequest, GenerationRequest,
        QuizRequest, SourceMaterial,
    },
};

#[derive(Clone, Debug, PartialEq)]
pub struct ComposedPrompt {
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

pub fn compose(request: &GenerationRequest) -> Result<ComposedPrompt, GenerationError> {
    match request {
        GenerationRequest::Dialogue(dialogue) => compose_dialogue(dialogue),
        GenerationRequest::Quiz(quiz) => compose_quiz(quiz),
        GenerationRequest::Flashcards(flashcards) => compose_flashcards(flashcards),
    }
}

pub fn compose_dialogue(request: &DialogueRequest) -> Result<ComposedPrompt, GenerationError> {
    let style = DialogueStyle::resolve(&request.style);
    let mode = DialogueMode::parse(&request.mode)?;
    let turns = request.turns;

    let system_prompt = format!(
        "You are simulating a {} conversation between a curious student and a knowledgeable teacher. \
         {} Have exactly {} back-and-forth exchanges (so {} messages), {}",
        style.descriptor(),
        mode.starter_rule(),
        turns,
        turns.saturating_mul(2),
        DIALOGUE_CLOSING
    );

    Ok(ComposedPrompt {
        system_prompt,
        user_prompt: format!("Topic: {}", request.topic),
        max_tokens: DIALOGUE_MAX_TOKENS,
        temperature: DIALOGUE_TEMPERATURE,
    })
}

pub fn compose_quiz(request: &QuizRequest) -> Result<ComposedPrompt, GenerationError> {
    let user_prompt = match request.source()? {
        SourceMaterial::Content(content) => {
            format!("Here is a piece of content:\n\n{}\n\n", content)
        }
        SourceMaterial::Topic(topic) => {
            format!("Create a quiz about the following topic:\n\n{}\n\n", topic)
        }
    };

    let system_prompt = format!(
        "{}\nProduce exactly {} questions in JSON format. {}",
        QUIZ_GENERATOR_PREAMBLE,
        request.num_questions.get(),
        QUIZ_QUESTION_FORMAT
    );

    Ok(ComposedPrompt {
        system_prompt,
        user_prompt,
        max_tokens: QUIZ_MAX_TOKENS,
        temperature: QUIZ_TEMPERATURE,
    })
}

pub fn compose_flashcards(request: &FlashcardRequest) -> Result<ComposedPrompt, GenerationError> {
    let num_cards = request.num_cards.get();

    let (instruction, user_prompt) = match request.source()? {
        SourceMaterial::Content(content) => (
            format!("Generate exactly {} flashcards from the content provided by the user.", num_cards),
            content.to_string(),
        ),
        SourceMaterial::Topic(topic) => (
            format!("Generate exactly {} flashcards for the topic: '{}'.", num_cards, topic),
            topic.to_string(),
        ),
    };

    let system_prompt = format!(
        "{}\n{} {}",
        FLASHCARD_GENERATOR_PREAMBLE, instruction, FLASHCARD_FORMAT
    );

    Ok(ComposedPrompt {
        system_prompt,
        user_prompt,
        max_tokens: FLASHCARD_MAX_TOKENS,
        temperature: FLASHCARD_TEMPERATURE,
    })
}
