//! Favorite cities, persisted as a flat JSON array of names.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WeatherError};

/// Ordered list of city names without duplicates. Membership is an exact,
/// case-sensitive string match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesList(Vec<String>);

impl FavoritesList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, city: &str) -> bool {
        self.0.iter().any(|c| c == city)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a FavoritesList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Reads and writes a [`FavoritesList`] at a fixed path.
///
/// The file is read wholesale and rewritten wholesale on every change. The
/// store does not deduplicate; [`FavoritesStore::add`] does.
#[derive(Debug, Clone)]
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

    /// Load the list, or an empty one if the file doesn't exist yet.
    pub fn load(&self) -> Result<FavoritesList> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no favorites file yet");
                return Ok(FavoritesList::new());
            }
            Err(source) => return Err(self.persistence(source)),
        };

        serde_json::from_str(&contents).map_err(|source| WeatherError::MalformedFavorites {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the file with `list`.
    pub fn save(&self, list: &FavoritesList) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.persistence(source))?;
        }

        let json = serde_json::to_vec(list)
            .map_err(|source| self.persistence(io::Error::other(source)))?;

        fs::write(&self.path, json).map_err(|source| self.persistence(source))?;
        tracing::debug!(path = %self.path.display(), count = list.len(), "saved favorites");
        Ok(())
    }

    /// Append `city` and persist. An exact duplicate fails with
    /// [`WeatherError::AlreadyExists`] and nothing is written.
    pub fn add(&self, mut list: FavoritesList, city: &str) -> Result<FavoritesList> {
        if list.contains(city) {
            return Err(WeatherError::AlreadyExists { city: city.to_string() });
        }

        list.0.push(city.to_string());
        self.save(&list)?;
        tracing::info!(city, "added favorite");
        Ok(list)
    }

    /// Remove `city` if present, persisting only when something changed.
    pub fn remove(&self, mut list: FavoritesList, city: &str) -> Result<FavoritesList> {
        let before = list.len();
        list.0.retain(|c| c != city);

        if list.len() != before {
            self.save(&list)?;
            tracing::info!(city, "removed favorite");
        }

        Ok(list)
    }

    fn persistence(&self, source: io::Error) -> WeatherError {
        WeatherError::Persistence { path: self.path.clone(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FavoritesStore {
        FavoritesStore::new(dir.path().join("favorites.json"))
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let list = store_in(&dir).load().unwrap();

        assert!(list.is_empty());
    }

    #[test]
    fn save_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let list = FavoritesList(vec!["Paris".into(), "Berlin".into(), "Ankara".into()]);

        store.save(&list).unwrap();

        assert_eq!(store.load().unwrap(), list);
    }

    #[test]
    fn file_is_a_json_array_of_strings() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let list = store.add(FavoritesList::new(), "Paris").unwrap();
        store.add(list, "São Paulo").unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, ["Paris", "São Paulo"]);
    }

    #[test]
    fn add_duplicate_is_rejected_and_keeps_one_copy() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let list = store.add(FavoritesList::new(), "Paris").unwrap();
        let err = store.add(list.clone(), "Paris").unwrap_err();

        assert!(matches!(err, WeatherError::AlreadyExists { ref city } if city == "Paris"));
        assert_eq!(list.iter().filter(|c| *c == "Paris").count(), 1);
        assert_eq!(store.load().unwrap(), list);
    }

    #[test]
    fn membership_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let list = store.add(FavoritesList::new(), "paris").unwrap();
        let list = store.add(list, "Paris").unwrap();

        assert_eq!(list.as_slice(), ["paris", "Paris"]);
    }

    #[test]
    fn remove_present_city_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let list = store.add(FavoritesList::new(), "Paris").unwrap();
        let list = store.add(list, "Rome").unwrap();
        let list = store.remove(list, "Paris").unwrap();

        assert_eq!(list.as_slice(), ["Rome"]);
        assert_eq!(store.load().unwrap(), list);
    }

    #[test]
    fn remove_absent_city_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let list = store.remove(FavoritesList::new(), "Paris").unwrap();

        assert!(list.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"not": "a list"}"#).unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, WeatherError::MalformedFavorites { .. }));
    }

    #[test]
    fn save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FavoritesStore::new(dir.path().join("nested").join("favorites.json"));

        store.save(&FavoritesList(vec!["Lima".into()])).unwrap();

        assert_eq!(store.load().unwrap().as_slice(), ["Lima"]);
    }

    #[test]
    fn unwritable_path_is_persistence_failure() {
        let dir = tempfile::tempdir().unwrap();
        // The target path is an existing directory, so the write must fail.
        let store = FavoritesStore::new(dir.path());

        let err = store.save(&FavoritesList::new()).unwrap_err();
        assert!(matches!(err, WeatherError::Persistence { .. }));
        assert!(err.to_string().starts_with("Failed to access favorites file"));
    }
}
