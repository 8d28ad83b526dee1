//! Survey module - Surveys, questions, answers and submitted responses.

mod answer;
mod response;
mod survey;

pub use answer::{Answer, AnswerValue};
pub use response::SurveyResponse;
pub use survey::{Question, QuestionKind, QuestionOption, QuestionTag, Survey};
