pub mod answer;
pub mod bank;
pub mod engine;

pub use bank::{Question, QuestionBank};
pub use engine::{Current, QuestionView, QuizEngine, Submission, Verdict};
