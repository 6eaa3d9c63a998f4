use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use serde::Deserialize;

use crate::error::BankError;
use crate::lang::Localized;

/// One quiz item as stored in the quiz file.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    #[serde(rename = "q", default)]
    pub text: Localized<String>,
    #[serde(rename = "opts", default)]
    pub options: Localized<Vec<String>>,
    #[serde(rename = "a", default)]
    pub correct_answer: Localized<String>,
    #[serde(default)]
    pub explanation: Option<Localized<String>>,
}

/// The ordered question list, swapped as a whole on reload.
///
/// Sessions refer to questions by index only. Callers take one
/// [`QuestionBank::snapshot`] per operation so a concurrent reload can never
/// mix two versions of the list.
pub struct QuestionBank {
    source: Option<PathBuf>,
    questions: RwLock<Arc<Vec<Question>>>,
}

impl QuestionBank {
    /// Loads the bank from `path`. A missing or broken file yields an empty
    /// bank, which the quiz reports as finished straight away.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let questions = match read_questions(&path) {
            Ok(questions) => questions,
            Err(e) => {
                log::error!("{}", e);
                Vec::new()
            }
        };
        log::info!("Loaded quiz with {} questions", questions.len());

        Self {
            source: Some(path),
            questions: RwLock::new(Arc::new(questions)),
        }
    }

    /// A bank with fixed content; [`QuestionBank::reload`] leaves it as is.
    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self {
            source: None,
            questions: RwLock::new(Arc::new(questions)),
        }
    }

    pub fn snapshot(&self) -> Arc<Vec<Question>> {
        self.questions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count(&self) -> usize {
        self.snapshot().len()
    }

    pub fn get(&self, index: usize) -> Option<Question> {
        self.snapshot().get(index).cloned()
    }

    /// Re-reads the source file. On failure the last good content stays.
    pub fn reload(&self) -> Result<usize, BankError> {
        let Some(path) = &self.source else {
            return Ok(self.count());
        };
        let questions = read_questions(path)?;
        let count = questions.len();
        self.replace(questions);
        Ok(count)
    }

    pub fn replace(&self, questions: Vec<Question>) {
        *self.questions.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(questions);
    }
}

fn read_questions(path: &Path) -> Result<Vec<Question>, BankError> {
    let bytes = std::fs::read(path).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let json_err = |source| BankError::Json {
        path: path.to_path_buf(),
        source,
    };

    let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(json_err)?;
    if !value.is_array() {
        return Err(BankError::NotAList(path.to_path_buf()));
    }
    serde_json::from_value(value).map_err(json_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Lang;
    use crate::store::testing::scratch_dir;

    const QUIZ_JSON: &str = r#"[
        {
            "q": {"ru": "Год открытия парка?", "en": "Year the park opened?", "kz": "Саябақ қашан ашылды?"},
            "opts": {"ru": ["1979", "1991"], "en": ["1979", "1991"], "kz": ["1979", "1991"]},
            "a": {"ru": "1979", "en": "1979", "kz": "1979"},
            "explanation": "Парк открыт в 1979 году."
        },
        {
            "q": {"ru": "Площадь парка?"},
            "opts": {"ru": ["117 га", "50 га"]},
            "a": {"ru": "117 га"}
        }
    ]"#;

    fn write_quiz(name: &str, contents: &str) -> PathBuf {
        let dir = scratch_dir(name);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("quiz_data.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_questions_in_file_order() {
        let bank = QuestionBank::load(write_quiz("bank-load", QUIZ_JSON));
        assert_eq!(bank.count(), 2);

        let first = bank.get(0).unwrap();
        assert_eq!(first.text.resolve(Lang::Kk), "Саябақ қашан ашылды?");
        assert_eq!(
            first.explanation.unwrap().resolve(Lang::En),
            "Парк открыт в 1979 году."
        );
        assert!(bank.get(1).unwrap().explanation.is_none());
        assert!(bank.get(2).is_none());
    }

    #[test]
    fn bundled_quiz_file_is_complete() {
        let bank = QuestionBank::load(
            Path::new(env!("CARGO_MANIFEST_DIR")).join("data/quiz_data.json"),
        );
        assert!(bank.count() > 0);

        for question in bank.snapshot().iter() {
            for lang in [Lang::Kk, Lang::Ru, Lang::En] {
                assert!(!question.text.resolve(lang).is_empty());
                let options = question.options.resolve(lang);
                assert!(options.contains(&question.correct_answer.resolve(lang)));
            }
        }
    }

    #[test]
    fn entry_with_missing_fields_still_loads() {
        let path = write_quiz(
            "bank-partial",
            r#"[
                {"q": {"ru": "Вопрос?"}, "opts": {"ru": ["Да", "Нет"]}, "a": {"ru": "Да"}},
                {"q": {"ru": "Без ответа?"}, "opts": {"ru": ["Да", "Нет"]}},
                {}
            ]"#,
        );
        let bank = QuestionBank::load(&path);
        assert_eq!(bank.count(), 3);

        let unanswerable = bank.get(1).unwrap();
        assert_eq!(unanswerable.text.resolve(Lang::En), "Без ответа?");
        assert_eq!(unanswerable.correct_answer.resolve(Lang::Ru), "");

        let empty = bank.get(2).unwrap();
        assert_eq!(empty.text.resolve(Lang::Ru), "");
        assert!(empty.options.resolve(Lang::Ru).is_empty());
    }

    #[test]
    fn missing_file_gives_empty_bank() {
        let bank = QuestionBank::load(scratch_dir("bank-missing").join("quiz.json"));
        assert_eq!(bank.count(), 0);
    }

    #[test]
    fn failed_reload_keeps_last_good_content() {
        let path = write_quiz("bank-reload", QUIZ_JSON);
        let bank = QuestionBank::load(&path);

        std::fs::write(&path, r#"{"q": "not a list"}"#).unwrap();
        assert!(matches!(bank.reload(), Err(BankError::NotAList(_))));
        assert_eq!(bank.count(), 2);

        std::fs::remove_file(&path).unwrap();
        assert!(matches!(bank.reload(), Err(BankError::Io { .. })));
        assert_eq!(bank.count(), 2);
    }

    #[test]
    fn reload_picks_up_edits() {
        let path = write_quiz("bank-edit", QUIZ_JSON);
        let bank = QuestionBank::load(&path);
        let before = bank.snapshot();

        std::fs::write(&path, "[]").unwrap();
        assert_eq!(bank.reload().unwrap(), 0);
        assert_eq!(bank.count(), 0);
        assert_eq!(before.len(), 2);
    }
}
