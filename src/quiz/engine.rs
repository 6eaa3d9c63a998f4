use std::sync::Arc;

use crate::error::StorageError;
use crate::lang::Lang;
use crate::quiz::answer::{normalize, select_option};
use crate::quiz::bank::{Question, QuestionBank};
use crate::users::{QuizSession, UserDirectory};

/// A question rendered in the user's language.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub index: usize,
    pub total: usize,
    pub text: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Current {
    Question(QuestionView),
    /// The session ran past the last question. It has been cleared, so this is
    /// reported once.
    Finished { score: usize, total: usize },
    NoSession,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub correct: bool,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub progress: usize,
    pub score: usize,
    pub total: usize,
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Answered(Verdict),
    /// Nothing matched; the session is untouched and the same question stands.
    Unrecognized(QuestionView),
    Finished { score: usize, total: usize },
    NoSession,
}

/// Runs quiz sessions on top of the user directory and the question bank.
#[derive(Clone)]
pub struct QuizEngine {
    users: Arc<dyn UserDirectory>,
    bank: Arc<QuestionBank>,
}

impl QuizEngine {
    pub fn new(users: Arc<dyn UserDirectory>, bank: Arc<QuestionBank>) -> Self {
        Self { users, bank }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Starts over from the first question, discarding any previous session.
    ///
    /// The bank is re-read first so content edits reach new sessions.
    pub fn start(&self, user_id: u64) -> Result<(), StorageError> {
        match self.bank.reload() {
            Ok(count) => log::info!("User {} started quiz; questions={}", user_id, count),
            Err(e) => log::warn!("Keeping previous quiz content: {}", e),
        }
        self.users
            .set_quiz_session(user_id, QuizSession::Active { progress: 0, score: 0 })
    }

    pub fn stop(&self, user_id: u64) -> Result<(), StorageError> {
        self.users.set_quiz_session(user_id, QuizSession::NoSession)
    }

    pub fn is_active(&self, user_id: u64) -> bool {
        self.users.quiz_session(user_id).is_active()
    }

    pub fn current_question(&self, user_id: u64) -> Result<Current, StorageError> {
        let QuizSession::Active { progress, score } = self.users.quiz_session(user_id) else {
            return Ok(Current::NoSession);
        };
        let questions = self.bank.snapshot();
        let total = questions.len();

        match questions.get(progress) {
            Some(question) => {
                let lang = self.users.language(user_id);
                Ok(Current::Question(render(question, progress, total, lang)))
            }
            None => {
                self.stop(user_id)?;
                Ok(Current::Finished { score, total })
            }
        }
    }

    pub fn submit_answer(&self, user_id: u64, input: &str) -> Result<Submission, StorageError> {
        let QuizSession::Active { progress, score } = self.users.quiz_session(user_id) else {
            return Ok(Submission::NoSession);
        };
        let questions = self.bank.snapshot();
        let total = questions.len();

        let Some(question) = questions.get(progress) else {
            self.stop(user_id)?;
            return Ok(Submission::Finished { score, total });
        };

        let lang = self.users.language(user_id);
        let options = question.options.resolve(lang);
        let Some(selected) = select_option(input, &options) else {
            return Ok(Submission::Unrecognized(render(question, progress, total, lang)));
        };

        let correct_answer = question.correct_answer.resolve(lang);
        let correct = !correct_answer.is_empty() && normalize(selected) == normalize(&correct_answer);

        let progress = progress + 1;
        let score = score + usize::from(correct);
        self.users
            .set_quiz_session(user_id, QuizSession::Active { progress, score })?;

        Ok(Submission::Answered(Verdict {
            correct,
            correct_answer,
            explanation: question
                .explanation
                .as_ref()
                .map(|explanation| explanation.resolve(lang))
                .filter(|explanation| !explanation.is_empty()),
            progress,
            score,
            total,
            finished: progress >= total,
        }))
    }
}

fn render(question: &Question, index: usize, total: usize, lang: Lang) -> QuestionView {
    QuestionView {
        index,
        total,
        text: question.text.resolve(lang),
        options: question.options.resolve(lang),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Localized;
    use crate::users::JsonUserDirectory;

    const USER: u64 = 100;

    fn question(text: &str, options: &[&str], answer: &str) -> Question {
        Question {
            text: Localized::new().with(Lang::Ru, text.to_string()),
            options: Localized::new()
                .with(Lang::Ru, options.iter().map(|o| o.to_string()).collect()),
            correct_answer: Localized::new().with(Lang::Ru, answer.to_string()),
            explanation: None,
        }
    }

    fn scenario_bank() -> Vec<Question> {
        vec![
            question("Capital of France?", &["London", "Paris"], "Paris"),
            question("Lucky number?", &["5", "7"], "7"),
        ]
    }

    fn engine_with(questions: Vec<Question>) -> (QuizEngine, Arc<JsonUserDirectory>) {
        let users = Arc::new(JsonUserDirectory::in_memory());
        let engine = QuizEngine::new(
            users.clone(),
            Arc::new(QuestionBank::from_questions(questions)),
        );
        (engine, users)
    }

    fn session(engine: &QuizEngine) -> QuizSession {
        engine.users.quiz_session(USER)
    }

    #[test]
    fn scenario_two_questions_to_finish() {
        let (engine, _) = engine_with(scenario_bank());
        engine.start(USER).unwrap();
        assert_eq!(session(&engine), QuizSession::Active { progress: 0, score: 0 });

        let Submission::Answered(first) = engine.submit_answer(USER, "2").unwrap() else {
            panic!("expected an answer");
        };
        assert!(first.correct);
        assert_eq!((first.progress, first.score, first.finished), (1, 1, false));

        let Submission::Answered(second) = engine.submit_answer(USER, "5").unwrap() else {
            panic!("expected an answer");
        };
        assert!(!second.correct);
        assert_eq!(second.correct_answer, "7");
        assert_eq!((second.progress, second.score, second.finished), (2, 1, true));

        assert_eq!(
            engine.current_question(USER).unwrap(),
            Current::Finished { score: 1, total: 2 }
        );
        assert!(!engine.is_active(USER));
        assert_eq!(engine.current_question(USER).unwrap(), Current::NoSession);
    }

    #[test]
    fn empty_bank_finishes_immediately() {
        let (engine, _) = engine_with(Vec::new());
        engine.start(USER).unwrap();
        assert!(engine.is_active(USER));
        assert_eq!(
            engine.current_question(USER).unwrap(),
            Current::Finished { score: 0, total: 0 }
        );
        assert!(!engine.is_active(USER));
    }

    #[test]
    fn progress_is_monotonic_and_score_bounded() {
        let questions = (0..4)
            .map(|i| question(&format!("Q{}", i), &["yes", "no"], "yes"))
            .collect();
        let (engine, _) = engine_with(questions);
        engine.start(USER).unwrap();

        for (step, input) in ["yes", "no", "1", "2"].iter().enumerate() {
            let Submission::Answered(verdict) = engine.submit_answer(USER, input).unwrap() else {
                panic!("expected an answer");
            };
            assert_eq!(verdict.progress, step + 1);
            assert!(verdict.score <= verdict.progress);
        }
        assert_eq!(session(&engine), QuizSession::Active { progress: 4, score: 2 });

        assert_eq!(
            engine.submit_answer(USER, "yes").unwrap(),
            Submission::Finished { score: 2, total: 4 }
        );
        assert_eq!(session(&engine), QuizSession::NoSession);
    }

    #[test]
    fn stop_is_idempotent() {
        let (engine, users) = engine_with(scenario_bank());
        engine.stop(USER).unwrap();
        assert_eq!(session(&engine), QuizSession::NoSession);
        assert!(users.get_user(USER).is_none());

        engine.start(USER).unwrap();
        engine.stop(USER).unwrap();
        engine.stop(USER).unwrap();
        assert!(!engine.is_active(USER));
    }

    #[test]
    fn restart_resets_progress_and_score() {
        let (engine, _) = engine_with(scenario_bank());
        engine.start(USER).unwrap();
        engine.submit_answer(USER, "Paris").unwrap();
        assert_eq!(session(&engine), QuizSession::Active { progress: 1, score: 1 });

        engine.start(USER).unwrap();
        assert_eq!(session(&engine), QuizSession::Active { progress: 0, score: 0 });
    }

    #[test]
    fn numeric_shortcut_matches_option_text() {
        let bank = vec![question("Pick", &["A", "B", "C"], "B")];
        let (by_number, _) = engine_with(bank.clone());
        let (by_text, _) = engine_with(bank);
        by_number.start(USER).unwrap();
        by_text.start(USER).unwrap();

        assert_eq!(
            by_number.submit_answer(USER, "2").unwrap(),
            by_text.submit_answer(USER, "B").unwrap()
        );
        assert_eq!(session(&by_number), session(&by_text));
    }

    #[test]
    fn unrecognized_input_changes_nothing() {
        let (engine, _) = engine_with(scenario_bank());
        engine.start(USER).unwrap();

        let outcome = engine.submit_answer(USER, "Berlin").unwrap();
        let Submission::Unrecognized(view) = outcome else {
            panic!("expected the question again");
        };
        assert_eq!(view.index, 0);
        assert_eq!(view.options, vec!["London", "Paris"]);
        assert_eq!(session(&engine), QuizSession::Active { progress: 0, score: 0 });
        assert_eq!(
            engine.current_question(USER).unwrap(),
            Current::Question(view)
        );
    }

    #[test]
    fn answer_without_session_is_reported() {
        let (engine, _) = engine_with(scenario_bank());
        assert_eq!(engine.submit_answer(USER, "1").unwrap(), Submission::NoSession);
    }

    #[test]
    fn unsupported_language_falls_back_to_default_then_empty() {
        let mut english_only = question("", &[], "");
        english_only.text = Localized::new().with(Lang::En, "English only".to_string());
        let (engine, users) = engine_with(vec![
            question("Вопрос", &["Да", "Нет"], "Да"),
            english_only,
        ]);

        // Stored as "fr", read back as the default language.
        let record: crate::users::UserRecord =
            serde_json::from_str(r#"{"id": 100, "lang": "fr"}"#).unwrap();
        users.ensure_user(record.id, "", "").unwrap();
        users.set_language(record.id, record.lang).unwrap();
        engine.start(USER).unwrap();

        let Current::Question(first) = engine.current_question(USER).unwrap() else {
            panic!("expected a question");
        };
        assert_eq!(first.text, "Вопрос");

        engine.submit_answer(USER, "да").unwrap();
        let Current::Question(second) = engine.current_question(USER).unwrap() else {
            panic!("expected a question");
        };
        assert_eq!(second.text, "");
        assert!(second.options.is_empty());
    }

    #[test]
    fn explanation_is_localized_and_only_when_present() {
        let mut with_note = question("Площадь?", &["117 га", "50 га"], "117 га");
        with_note.explanation = Some(
            Localized::new()
                .with(Lang::Ru, "Площадь парка 117 га.".to_string())
                .with(Lang::En, "The park covers 117 ha.".to_string()),
        );
        with_note.options = with_note
            .options
            .with(Lang::En, vec!["117 ha".to_string(), "50 ha".to_string()]);
        with_note.correct_answer = with_note.correct_answer.with(Lang::En, "117 ha".to_string());
        let (engine, users) = engine_with(vec![with_note]);
        users.ensure_user(USER, "", "").unwrap();
        users.set_language(USER, Lang::En).unwrap();
        engine.start(USER).unwrap();

        let Submission::Answered(verdict) = engine.submit_answer(USER, "50 HA").unwrap() else {
            panic!("expected an answer");
        };
        assert!(!verdict.correct);
        assert_eq!(verdict.correct_answer, "117 ha");
        assert_eq!(verdict.explanation.as_deref(), Some("The park covers 117 ha."));
        assert!(verdict.finished);
    }

    #[test]
    fn shrunken_bank_ends_the_session() {
        let (engine, _) = engine_with(scenario_bank());
        engine.start(USER).unwrap();
        engine.submit_answer(USER, "1").unwrap();

        engine.bank().replace(vec![question("Only one", &["x"], "x")]);
        assert_eq!(
            engine.current_question(USER).unwrap(),
            Current::Finished { score: 0, total: 1 }
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_users_do_not_interfere() {
        let questions = (0..50)
            .map(|i| question(&format!("Q{}", i), &["right", "wrong"], "right"))
            .collect();
        let (engine, _) = engine_with(questions);

        let play = |user_id: u64, input: &'static str| {
            let engine = engine.clone();
            tokio::spawn(async move {
                engine.start(user_id).unwrap();
                for _ in 0..50 {
                    engine.submit_answer(user_id, input).unwrap();
                    tokio::task::yield_now().await;
                }
            })
        };

        let (a, b) = tokio::join!(play(1, "right"), play(2, "2"));
        a.unwrap();
        b.unwrap();

        assert_eq!(
            engine.users.quiz_session(1),
            QuizSession::Active { progress: 50, score: 50 }
        );
        assert_eq!(
            engine.users.quiz_session(2),
            QuizSession::Active { progress: 50, score: 0 }
        );
    }
}
