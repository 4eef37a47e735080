use crate::RankError;
use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

pub trait Mapping<V: Copy> {
    fn get(&self, key: &str) -> Result<V, RankError>;

    fn set(&mut self, key: &str, value: V);

    fn delete(&mut self, key: &str) -> Result<V, RankError>;

    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a str> + 'a>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Copy> Mapping<V> for HashMap<String, V> {
    fn get(&self, key: &str) -> Result<V, RankError> {
        HashMap::get(self, key)
            .copied()
            .ok_or_else(|| RankError::KeyNotFound(key.to_string()))
    }

    fn set(&mut self, key: &str, value: V) {
        self.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) -> Result<V, RankError> {
        self.remove(key)
            .ok_or_else(|| RankError::KeyNotFound(key.to_string()))
    }

    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(HashMap::keys(self).map(String::as_str))
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<V: Copy> Mapping<V> for BTreeMap<String, V> {
    fn get(&self, key: &str) -> Result<V, RankError> {
        BTreeMap::get(self, key)
            .copied()
            .ok_or_else(|| RankError::KeyNotFound(key.to_string()))
    }

    fn set(&mut self, key: &str, value: V) {
        self.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) -> Result<V, RankError> {
        self.remove(key)
            .ok_or_else(|| RankError::KeyNotFound(key.to_string()))
    }

    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(BTreeMap::keys(self).map(String::as_str))
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertionMap<V> {
    data: IndexMap<String, V>,
}

impl<V> InsertionMap<V> {
    pub fn new() -> Self {
        Self {
            data: IndexMap::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.data.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> Default for InsertionMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Copy> Mapping<V> for InsertionMap<V> {
    fn get(&self, key: &str) -> Result<V, RankError> {
        self.data
            .get(key)
            .copied()
            .ok_or_else(|| RankError::KeyNotFound(key.to_string()))
    }

    // overwriting keeps the key's slot
    fn set(&mut self, key: &str, value: V) {
        self.data.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) -> Result<V, RankError> {
        self.data
            .shift_remove(key)
            .ok_or_else(|| RankError::KeyNotFound(key.to_string()))
    }

    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(self.data.keys().map(String::as_str))
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<V> std::iter::FromIterator<(String, V)> for InsertionMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<V: Serialize> Serialize for InsertionMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}
