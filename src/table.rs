use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `Table` is one id-keyed table of a coverage record (`statementMap`, `fnMap`, `branchMap`).
///
/// Entries keep their insertion order. Ids are opaque strings, but the ones allocated here
/// are decimal integers one past the largest numeric id present (non-numeric ids count as 0),
/// so they never collide with an existing id. Gaps are never reused.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    entries: IndexMap<String, T>,
    // largest numeric id ever inserted, in decimal without leading zeros
    max: String,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            max: "0".to_owned(),
        }
    }
}

impl<T> Table<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id the next [push](Self::push) will use.
    #[inline]
    pub fn next_id(&self) -> String {
        increment(&self.max)
    }

    /// Inserts `entry` under a freshly allocated id and returns that id.
    pub fn push(&mut self, entry: T) -> String {
        let id = self.next_id();
        self.entries.insert(id.clone(), entry);
        self.max.clone_from(&id);
        id
    }

    /// Inserts `entry` under `id`, returning the entry it replaced.
    pub fn insert<I>(&mut self, id: I, entry: T) -> Option<T>
    where
        I: Into<String>,
    {
        let id = id.into();
        if let Some(n) = numeric_id(&id) {
            if (n.len(), n) > (self.max.len(), self.max.as_str()) {
                self.max = n.to_owned();
            }
        }
        self.entries.insert(id, entry)
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.get(id)
    }

    #[inline]
    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, String, T> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Returns the value of a non-negative decimal id (`"7"`, `"+7"`, `"007"`) without its sign
/// and leading zeros. Ids of any length are accepted.
fn numeric_id(id: &str) -> Option<&str> {
    let digits = id.strip_prefix('+').unwrap_or(id);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match digits.trim_start_matches('0') {
        "" => Some("0"),
        n => Some(n),
    }
}

// decimal `n + 1`, for `n` without leading zeros
fn increment(n: &str) -> String {
    let mut digits = n.as_bytes().to_vec();
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return String::from_utf8_lossy(&digits).into_owned();
        }
    }
    let mut out = String::with_capacity(digits.len() + 1);
    out.push('1');
    out.push_str(&String::from_utf8_lossy(&digits));
    out
}

impl<T> FromIterator<(String, T)> for Table<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (id, entry) in iter {
            table.insert(id, entry);
        }
        table
    }
}

impl<T> IntoIterator for Table<T> {
    type Item = (String, T);
    type IntoIter = IntoIter<String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Table<T> {
    type Item = (&'a String, &'a T);
    type IntoIter = Iter<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<T: Serialize> Serialize for Table<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Table<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IndexMap::<String, T>::deserialize(deserializer).map(|entries| entries.into_iter().collect())
    }
}
