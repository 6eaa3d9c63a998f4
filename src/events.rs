use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::store;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Event {
    pub fn render(&self) -> String {
        let mut text = format!("🔹 {}\n", self.title);
        if !self.date.is_empty() {
            text.push_str(&format!("📆 {}\n", self.date));
        }
        if !self.location.is_empty() {
            text.push_str(&format!("📍 {}\n", self.location));
        }
        if let Some(description) = &self.description {
            text.push_str(&format!("📝 {}\n", description));
        }
        text
    }
}

/// An event as typed by an admin, before it gets an id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub location: String,
    pub description: Option<String>,
}

impl NewEvent {
    /// Parses `title | date | location | description`. Only the title is required.
    pub fn parse(args: &str) -> Option<Self> {
        let mut parts = args.split('|').map(str::trim);
        let title = parts.next().filter(|title| !title.is_empty())?;
        let mut next = || parts.next().unwrap_or_default().to_string();

        let date = next();
        let location = next();
        let description = Some(next()).filter(|d| !d.is_empty());
        Some(Self {
            title: title.to_string(),
            date,
            location,
            description,
        })
    }
}

#[derive(Default, Serialize, Deserialize)]
struct EventFile {
    #[serde(default)]
    events: Vec<Event>,
}

/// Park announcements, kept in a JSON file.
pub struct EventBoard {
    path: Option<PathBuf>,
    events: Mutex<Vec<Event>>,
}

impl EventBoard {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let file: EventFile = store::read_json(&path)?.unwrap_or_default();
        log::info!("Loaded {} events from {}", file.events.len(), path.display());

        Ok(Self {
            path: Some(path),
            events: Mutex::new(file.events),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            events: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Event>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<Event> {
        self.lock().clone()
    }

    /// Stores the event under the next free id.
    pub fn add(&self, new: NewEvent) -> Result<Event, StorageError> {
        let mut events = self.lock();
        let id = events.iter().map(|event| event.id).max().unwrap_or(0) + 1;
        let event = Event {
            id,
            title: new.title,
            date: new.date,
            location: new.location,
            description: new.description,
        };

        if let Some(path) = &self.path {
            let mut all = events.clone();
            all.push(event.clone());
            store::write_json(path, &EventFile { events: all })?;
        }

        events.push(event.clone());
        Ok(event)
    }
}
