use crate::{Mapping, RankError};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

// every traversal sorts a fresh snapshot of the keys
#[derive(Debug, Clone, PartialEq)]
pub struct SortedMap<V> {
    data: HashMap<String, V>,
}

impl<V> SortedMap<V> {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        let mut entries: Vec<(&str, &V)> =
            self.data.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}

impl<V> Default for SortedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Copy> Mapping<V> for SortedMap<V> {
    fn get(&self, key: &str) -> Result<V, RankError> {
        self.data
            .get(key)
            .copied()
            .ok_or_else(|| RankError::KeyNotFound(key.to_string()))
    }

    fn set(&mut self, key: &str, value: V) {
        self.data.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) -> Result<V, RankError> {
        self.data
            .remove(key)
            .ok_or_else(|| RankError::KeyNotFound(key.to_string()))
    }

    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        let mut keys: Vec<&str> = self.data.keys().map(String::as_str).collect();
        keys.sort_unstable();
        Box::new(keys.into_iter())
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<V> std::iter::FromIterator<(String, V)> for SortedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<V: Serialize> Serialize for SortedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.data.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod sorted_test {

    use super::*;

    fn animals(order: &[&str]) -> SortedMap<usize> {
        let mut map = SortedMap::new();
        for (i, name) in order.iter().enumerate() {
            map.set(name, i);
        }
        map
    }

    #[test]
    fn ascending_regardless_of_insertion() {
        let orders = [
            ["fox", "otter", "polar bear"],
            ["fox", "polar bear", "otter"],
            ["otter", "fox", "polar bear"],
            ["otter", "polar bear", "fox"],
            ["polar bear", "fox", "otter"],
            ["polar bear", "otter", "fox"],
        ];

        for order in orders.iter() {
            let map = animals(order);
            let keys: Vec<&str> = map.keys().collect();
            assert_eq!(keys, vec!["fox", "otter", "polar bear"]);
        }
    }

    #[test]
    fn keys_are_restartable() {
        let map = animals(&["polar bear", "otter", "fox"]);

        let first: Vec<&str> = map.keys().collect();
        let second: Vec<&str> = map.keys().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn order_follows_current_keys() {
        let mut map = animals(&["otter", "fox"]);
        map.delete("fox").unwrap();
        map.set("bat", 7);
        map.set("fox", 8);

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["bat", "fox", "otter"]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn missing_key() {
        let mut map = animals(&["otter"]);

        assert_eq!(
            map.get("fox"),
            Err(RankError::KeyNotFound("fox".to_string()))
        );
        assert_eq!(
            map.delete("fox"),
            Err(RankError::KeyNotFound("fox".to_string()))
        );
        assert_eq!(map.delete("otter"), Ok(0));
        assert!(map.is_empty());
    }

    #[test]
    fn overwrite() {
        let mut map = animals(&["otter"]);
        map.set("otter", 42);

        assert_eq!(map.get("otter"), Ok(42));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn iter_pairs_sorted() {
        let map: SortedMap<u32> = vec![("cat".to_string(), 1), ("bat".to_string(), 2)]
            .into_iter()
            .collect();

        let pairs: Vec<(&str, &u32)> = map.iter().collect();
        assert_eq!(pairs, vec![("bat", &2), ("cat", &1)]);
    }

    #[test]
    fn serialize_sorted() {
        let map = animals(&["polar bear", "otter", "fox"]);

        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"fox":2,"otter":1,"polar bear":0}"#
        );
    }
}
