pub const DIALOGUE_CLOSING: &str = "and end with a warm wrap-up.";

pub const QUIZ_GENERATOR_PREAMBLE: &str = "You are an AI quiz generator. *Respond with exactly one JSON object and nothing else, no additional text.*";

pub const QUIZ_QUESTION_FORMAT: &str = "Include a mix of MCQ, True/False, and Fill-in-the-blank questions. For each question, provide:
  • type (\"MCQ\" / \"True/False\" / \"Fill-in-the-blank\"),
  • question text,
  • for MCQ: a list of exactly 4 options and the correct answer letter,
  • for True/False: answer \"True\" or \"False\",
  • for Fill-in-the-blank: the correct word/phrase,
  • a short explanation (rationale) for the correct answer.
Return a single JSON object with one key \"quiz\" whose value is a list of those question objects.";

pub const FLASHCARD_GENERATOR_PREAMBLE: &str = "You are an AI flashcard generator. *Respond with only a JSON object and no extra text.*";

pub const FLASHCARD_FORMAT: &str = "Each flashcard should have a 'term' and a 'definition'. The definition should be clear and concise.";

pub const DIALOGUE_MAX_TOKENS: u32 = 512;
pub const DIALOGUE_TEMPERATURE: f32 = 0.8;

pub const QUIZ_MAX_TOKENS: u32 = 800;
pub const QUIZ_TEMPERATURE: f32 = 0.7;

pub const FLASHCARD_MAX_TOKENS: u32 = 512;
pub const FLASHCARD_TEMPERATURE: f32 = 0.7;
