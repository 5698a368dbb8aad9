// Favorites store: JSON persistence for user-selected destinations

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::Destination;

// Default location of the favorites file, relative to the working directory
pub const DEFAULT_FAVORITES_PATH: &str = "favorites.json";

// Error types for favorites persistence
#[derive(Error, Debug)]
pub enum FavoritesError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParseError(String),
}

// Outcome of a single entry in a selection batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(Destination),
    Duplicate(Destination),
    InvalidIndex(String),
    InvalidInput(String),
}

// Stores favorites as a JSON array of destination records. The whole file is
// loaded on every read and rewritten on every change; there is no concurrent
// writer to coordinate with.
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Load all stored favorites. A missing file is an empty collection, not
    // an error.
    pub fn load(&self) -> Result<Vec<Destination>, FavoritesError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let favorites: Vec<Destination> = serde_json::from_str(&contents)
            .map_err(|e| FavoritesError::JsonParseError(e.to_string()))?;

        tracing::debug!(
            count = favorites.len(),
            path = %self.path.display(),
            "loaded favorites"
        );

        Ok(favorites)
    }

    // Append a destination unless an identical record is already stored.
    // Returns true when the store changed.
    pub fn add(&self, dest: &Destination) -> Result<bool, FavoritesError> {
        let mut favorites = self.load()?;

        if favorites.contains(dest) {
            return Ok(false);
        }

        favorites.push(dest.clone());
        self.save_all(&favorites)?;

        Ok(true)
    }

    // Save the chosen 1-based positions out of a result listing. Out-of-range
    // and non-numeric entries are reported and skipped without aborting the
    // rest of the batch. The file is rewritten once, and only when at least
    // one new record was appended.
    pub fn save_selection(
        &self,
        results: &[Destination],
        selection: &str,
    ) -> Result<Vec<SaveOutcome>, FavoritesError> {
        let mut favorites = self.load()?;
        let mut outcomes = Vec::new();
        let mut appended = false;

        for token in selection.split(',') {
            let token = token.trim();

            match token.parse::<usize>() {
                Ok(position) if position >= 1 && position <= results.len() => {
                    let dest = &results[position - 1];
                    if favorites.contains(dest) {
                        outcomes.push(SaveOutcome::Duplicate(dest.clone()));
                    } else {
                        favorites.push(dest.clone());
                        appended = true;
                        outcomes.push(SaveOutcome::Saved(dest.clone()));
                    }
                }
                Ok(_) => {
                    tracing::warn!(token, "selection position out of range");
                    outcomes.push(SaveOutcome::InvalidIndex(token.to_string()));
                }
                Err(_) => {
                    tracing::warn!(token, "selection entry is not a number");
                    outcomes.push(SaveOutcome::InvalidInput(token.to_string()));
                }
            }
        }

        if appended {
            self.save_all(&favorites)?;
        }

        Ok(outcomes)
    }

    // Rewrite the whole store. The JSON goes to a sibling temp file first and
    // is renamed into place, so an interrupted write cannot truncate the
    // existing store.
    fn save_all(&self, favorites: &[Destination]) -> Result<(), FavoritesError> {
        let json = serde_json::to_string_pretty(favorites)
            .map_err(|e| FavoritesError::JsonParseError(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;

        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(FavoritesError::IoError(e));
        }

        tracing::debug!(
            count = favorites.len(),
            path = %self.path.display(),
            "wrote favorites"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paris() -> Destination {
        Destination::new("Paris", "France", 1600, &["romantic", "city", "art"])
    }

    fn tokyo() -> Destination {
        Destination::new("Tokyo", "Japan", 2200, &["city", "tech", "culture"])
    }

    fn santorini() -> Destination {
        Destination::new("Santorini", "Greece", 2000, &["island", "luxury", "sunset"])
    }

    fn store_in(dir: &TempDir) -> FavoritesStore {
        FavoritesStore::new(dir.path().join("favorites.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_add_round_trip_with_dedup() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.add(&paris()).unwrap());
        assert_eq!(store.load().unwrap(), vec![paris()]);

        // saving the same record again leaves exactly one entry
        assert!(!store.add(&paris()).unwrap());
        assert_eq!(store.load().unwrap(), vec![paris()]);
    }

    #[test]
    fn test_dedup_is_structural_not_by_name() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut cheaper_paris = paris();
        cheaper_paris.cost = 1200;

        assert!(store.add(&paris()).unwrap());
        assert!(store.add(&cheaper_paris).unwrap());
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_save_selection_mixed_batch() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let results = vec![paris(), tokyo()];

        let outcomes = store.save_selection(&results, "2, abc, 9, 1").unwrap();
        assert_eq!(
            outcomes,
            vec![
                SaveOutcome::Saved(tokyo()),
                SaveOutcome::InvalidInput("abc".to_string()),
                SaveOutcome::InvalidIndex("9".to_string()),
                SaveOutcome::Saved(paris()),
            ]
        );

        assert_eq!(store.load().unwrap(), vec![tokyo(), paris()]);
    }

    #[test]
    fn test_save_selection_out_of_range_only_leaves_store_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let results = vec![paris(), tokyo(), santorini()];

        let outcomes = store.save_selection(&results, "9").unwrap();
        assert_eq!(outcomes, vec![SaveOutcome::InvalidIndex("9".to_string())]);

        // nothing was written at all
        assert!(!store.path().exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_selection_zero_is_out_of_range() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let outcomes = store.save_selection(&[paris()], "0").unwrap();
        assert_eq!(outcomes, vec![SaveOutcome::InvalidIndex("0".to_string())]);
    }

    #[test]
    fn test_save_selection_reports_duplicates() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.add(&paris()).unwrap();

        let outcomes = store.save_selection(&[paris()], "1").unwrap();
        assert_eq!(outcomes, vec![SaveOutcome::Duplicate(paris())]);
        assert_eq!(store.load().unwrap(), vec![paris()]);
    }

    #[test]
    fn test_persisted_format_field_names() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.add(&paris()).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value[0]["destination"], "Paris");
        assert_eq!(value[0]["country"], "France");
        assert_eq!(value[0]["cost"], 1600);
        assert_eq!(value[0]["keywords"][0], "romantic");
    }

    #[test]
    fn test_load_accepts_records_without_keywords() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        fs::write(
            store.path(),
            r#"[{"destination": "Lisbon", "country": "Portugal", "cost": 1400}]"#,
        )
        .unwrap();

        let favorites = store.load().unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].destination, "Lisbon");
        assert!(favorites[0].keywords.is_empty());
    }

    #[test]
    fn test_load_malformed_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(
            store.load(),
            Err(FavoritesError::JsonParseError(_))
        ));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.add(&paris()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["favorites.json"]);
    }
}
