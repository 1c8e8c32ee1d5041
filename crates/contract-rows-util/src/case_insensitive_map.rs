use indexmap::IndexMap;

/// An insertion-ordered map with ASCII case-insensitive key lookup.
///
/// Keys keep the casing they were first inserted with; lookups and
/// re-insertions match any casing of the same key. Iteration yields
/// entries in insertion order with their stored casing, which makes the
/// map suitable for document key sets where order is part of the
/// serialization contract.
///
/// # Examples
///
/// ```
/// use contract_rows_util::CaseInsensitiveMap;
///
/// let mut map = CaseInsensitiveMap::new();
/// map.insert("Guid".to_string(), 1);
///
/// assert_eq!(map.get("guid"), Some(&1));
/// assert_eq!(map.get("GUID"), Some(&1));
/// assert_eq!(map.stored_key("guid"), Some("Guid"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseInsensitiveMap<V> {
    entries: IndexMap<String, V>,
}

impl<V> Default for CaseInsensitiveMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CaseInsensitiveMap<V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The stored key matching `key` under case-insensitive comparison.
    pub fn stored_key(&self, key: &str) -> Option<&str> {
        self.entries
            .keys()
            .find(|k| k.eq_ignore_ascii_case(key))
            .map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.stored_key(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    /// Inserts a value, replacing any entry whose key matches
    /// case-insensitively. A replaced entry keeps its position and its
    /// originally stored key casing.
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        if let Some(stored) = self.stored_key(&key).map(str::to_string) {
            return self.entries.insert(stored, value);
        }
        self.entries.insert(key, value)
    }

    /// Removes an entry by key (case-insensitive), preserving the order
    /// of the remaining entries.
    pub fn shift_remove(&mut self, key: &str) -> Option<V> {
        let stored = self.stored_key(key)?.to_string();
        self.entries.shift_remove(&stored)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &V)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }
}

impl<V> FromIterator<(String, V)> for CaseInsensitiveMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
