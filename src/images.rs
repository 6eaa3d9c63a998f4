use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::content::SIGHTS;

const CANDIDATE_SUFFIXES: [&str; 6] = ["_fixed.jpg", ".jpg", ".jpeg", ".png", ".webp", ".bmp"];

/// Photo file for each sight number, resolved once at startup.
#[derive(Debug, Default)]
pub struct SightImages {
    by_number: HashMap<usize, PathBuf>,
}

impl SightImages {
    pub fn scan(dir: &Path) -> Self {
        log::info!("Images dir resolved to: {}", dir.display());
        let mut by_number = HashMap::new();
        for sight in SIGHTS.iter() {
            match find_image(dir, sight.number) {
                Some(path) => {
                    log::info!("Mapping image {} -> {}", sight.number, path.display());
                    by_number.insert(sight.number, path);
                }
                None => log::warn!("No image mapped for sight {}", sight.number),
            }
        }
        Self { by_number }
    }

    /// The photo for `number`, if it is still on disk.
    pub fn get(&self, number: usize) -> Option<&Path> {
        let path = self.by_number.get(&number)?;
        if path.is_file() {
            Some(path)
        } else {
            log::warn!("Mapped image missing on disk: {}", path.display());
            None
        }
    }
}

/// `<n>_fixed.jpg`, `<n>.jpg` and the other known names first, then any file
/// whose name starts with the number (`3-pond.png`, but not `30.png`).
fn find_image(dir: &Path, number: usize) -> Option<PathBuf> {
    let prefix = number.to_string();

    let exact = CANDIDATE_SUFFIXES
        .iter()
        .map(|suffix| dir.join(format!("{}{}", prefix, suffix)))
        .find(|path| path.is_file());
    if exact.is_some() {
        return exact;
    }

    let mut candidates: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| name.strip_prefix(prefix.as_str()))
                .map_or(false, |rest| !rest.starts_with(|c: char| c.is_ascii_digit()))
        })
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::scratch_dir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"img").unwrap();
    }

    #[test]
    fn prefers_known_names_then_prefix() {
        let dir = scratch_dir("images");
        std::fs::create_dir_all(&dir).unwrap();
        touch(&dir, "1.png");
        touch(&dir, "1_fixed.jpg");
        touch(&dir, "2-flowers.webp");
        touch(&dir, "30.jpg");
        touch(&dir, "10.jpg");

        let images = SightImages::scan(&dir);
        assert_eq!(images.get(1), Some(dir.join("1_fixed.jpg").as_path()));
        assert_eq!(images.get(2), Some(dir.join("2-flowers.webp").as_path()));
        assert_eq!(images.get(3), None);
        assert_eq!(images.get(10), Some(dir.join("10.jpg").as_path()));
    }

    #[test]
    fn missing_dir_maps_nothing() {
        let images = SightImages::scan(&scratch_dir("no-images"));
        assert!(SIGHTS.iter().all(|sight| images.get(sight.number).is_none()));
    }

    #[test]
    fn deleted_file_is_not_returned() {
        let dir = scratch_dir("images-deleted");
        std::fs::create_dir_all(&dir).unwrap();
        touch(&dir, "5.jpg");
        let images = SightImages::scan(&dir);

        std::fs::remove_file(dir.join("5.jpg")).unwrap();
        assert_eq!(images.get(5), None);
    }
}
