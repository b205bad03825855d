use crate::utils::error::{CollectionsError, Result};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Key/value map with two insertion policies: [`add`](Self::add) refuses an
/// existing key, [`insert`](Self::insert) overwrites it.
#[derive(Debug, Clone)]
pub struct Dictionary<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash + Display, V> Dictionary<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Builds from `(key, value)` pairs with [`add`](Self::add) semantics.
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut dictionary = Self::new();
        for (key, value) in pairs {
            dictionary.add(key, value)?;
        }
        Ok(dictionary)
    }

    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        if self.entries.contains_key(&key) {
            return Err(CollectionsError::DuplicateKey {
                key: key.to_string(),
            });
        }
        self.entries.insert(key, value);
        Ok(())
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash + Display,
    {
        self.entries.get(key).ok_or_else(|| CollectionsError::KeyNotFound {
            key: key.to_string(),
        })
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash + Display, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Display, V> FromIterator<(K, V)> for Dictionary<K, V> {
    /// Index-assignment semantics: a repeated key keeps the last value.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for (key, value) in iter {
            dictionary.insert(key, value);
        }
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Person;

    #[test]
    fn test_add_rejects_duplicate_key() {
        let mut people = Dictionary::new();
        people
            .add("Homer".to_string(), Person::new("Homer", "Simpson", 47))
            .unwrap();

        let err = people
            .add("Homer".to_string(), Person::new("Marge", "Simpson", 45))
            .unwrap_err();
        assert!(matches!(err, CollectionsError::DuplicateKey { ref key } if key == "Homer"));

        assert_eq!(people.len(), 1);
        assert_eq!(people.get("Homer").unwrap().first_name, "Homer");
    }

    #[test]
    fn test_insert_overwrites() {
        let mut people = Dictionary::new();
        assert!(people
            .insert("Homer".to_string(), Person::new("Homer", "Simpson", 47))
            .is_none());
        let previous = people.insert("Homer".to_string(), Person::new("Lisa", "Simpson", 9));

        assert_eq!(previous.unwrap().first_name, "Homer");
        assert_eq!(people.get("Homer").unwrap().first_name, "Lisa");
    }

    #[test]
    fn test_try_from_pairs_and_missing_key() {
        let people = Dictionary::try_from_pairs([
            ("Marge".to_string(), Person::new("Marge", "Simpson", 45)),
            ("Lisa".to_string(), Person::new("Lisa", "Simpson", 9)),
        ])
        .unwrap();
        assert!(people.contains_key("Lisa"));
        assert!(matches!(
            people.get("Bart"),
            Err(CollectionsError::KeyNotFound { .. })
        ));

        let duplicated = Dictionary::try_from_pairs([("a", 1), ("a", 2)]);
        assert!(duplicated.is_err());
    }

    #[test]
    fn test_collect_keeps_last_value() {
        let map: Dictionary<&str, i32> = [("a", 1), ("a", 2)].into_iter().collect();
        assert_eq!(*map.get("a").unwrap(), 2);
    }
}
