use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::lang::Lang;
use crate::store;

/// Where a user stands in the quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizSession {
    #[default]
    NoSession,
    Active { progress: usize, score: usize },
}

impl QuizSession {
    pub fn is_active(&self) -> bool {
        matches!(self, QuizSession::Active { .. })
    }

    pub fn score(&self) -> usize {
        match self {
            QuizSession::Active { score, .. } => *score,
            QuizSession::NoSession => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lang: Lang,
    #[serde(default)]
    pub quiz: QuizSession,
}

impl UserRecord {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            username: String::new(),
            name: String::new(),
            lang: Lang::DEFAULT,
            quiz: QuizSession::NoSession,
        }
    }

    /// Name to show in listings: the display name, then the handle, then the id.
    pub fn display_name(&self) -> String {
        if !self.name.trim().is_empty() {
            self.name.clone()
        } else if !self.username.trim().is_empty() {
            format!("@{}", self.username)
        } else {
            self.id.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub id: u64,
    pub name: String,
    pub score: usize,
}

/// Per-user state the bot keeps between messages.
///
/// Reads never fail: a user the directory does not know gets default values.
/// Writes either persist and take effect, or fail and change nothing.
pub trait UserDirectory: Send + Sync {
    fn get_user(&self, id: u64) -> Option<UserRecord>;

    /// Creates the record if it does not exist yet and returns it.
    fn ensure_user(&self, id: u64, username: &str, name: &str) -> Result<UserRecord, StorageError>;

    fn language(&self, id: u64) -> Lang {
        self.get_user(id).map(|user| user.lang).unwrap_or_default()
    }

    fn set_language(&self, id: u64, lang: Lang) -> Result<(), StorageError>;

    fn quiz_session(&self, id: u64) -> QuizSession {
        self.get_user(id).map(|user| user.quiz).unwrap_or_default()
    }

    /// Replaces the user's session, creating the user if a session is being
    /// started for someone unknown. Clearing an unknown user's session is a no-op.
    fn set_quiz_session(&self, id: u64, session: QuizSession) -> Result<(), StorageError>;

    fn list_users(&self) -> Vec<UserRecord>;

    /// Top `limit` users by current quiz score, ties broken by ascending id.
    fn leaderboard(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .list_users()
            .into_iter()
            .map(|user| LeaderboardEntry {
                id: user.id,
                name: user.display_name(),
                score: user.quiz.score(),
            })
            .collect();
        entries.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
        entries.truncate(limit);
        entries
    }
}

/// User directory kept in memory and mirrored to a JSON file after every change.
pub struct JsonUserDirectory {
    path: Option<PathBuf>,
    users: Mutex<HashMap<u64, UserRecord>>,
}

impl JsonUserDirectory {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let users: HashMap<u64, UserRecord> = store::read_json(&path)?.unwrap_or_default();
        log::info!("Loaded {} users from {}", users.len(), path.display());

        Ok(Self {
            path: Some(path),
            users: Mutex::new(users),
        })
    }

    /// A directory that is never written to disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            users: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<u64, UserRecord>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies `change` to a copy of the record, writes the whole directory with
    /// that copy in place and only then commits it to memory.
    fn update(
        &self,
        id: u64,
        change: impl FnOnce(&mut UserRecord),
    ) -> Result<UserRecord, StorageError> {
        let mut users = self.lock();
        let mut record = users.get(&id).cloned().unwrap_or_else(|| UserRecord::new(id));
        change(&mut record);

        if let Some(path) = &self.path {
            let mut snapshot: BTreeMap<u64, &UserRecord> =
                users.iter().map(|(id, user)| (*id, user)).collect();
            snapshot.insert(id, &record);
            store::write_json(path, &snapshot)?;
        }

        users.insert(id, record.clone());
        Ok(record)
    }
}

impl UserDirectory for JsonUserDirectory {
    fn get_user(&self, id: u64) -> Option<UserRecord> {
        self.lock().get(&id).cloned()
    }

    fn ensure_user(&self, id: u64, username: &str, name: &str) -> Result<UserRecord, StorageError> {
        if let Some(user) = self.get_user(id) {
            return Ok(user);
        }
        self.update(id, |user| {
            user.username = username.to_string();
            user.name = name.to_string();
        })
    }

    fn set_language(&self, id: u64, lang: Lang) -> Result<(), StorageError> {
        self.update(id, |user| user.lang = lang).map(|_| ())
    }

    fn set_quiz_session(&self, id: u64, session: QuizSession) -> Result<(), StorageError> {
        if session == QuizSession::NoSession && self.get_user(id).is_none() {
            return Ok(());
        }
        self.update(id, |user| user.quiz = session).map(|_| ())
    }

    fn list_users(&self) -> Vec<UserRecord> {
        let mut users: Vec<UserRecord> = self.lock().values().cloned().collect();
        users.sort_by_key(|user| user.id);
        users
    }
}
