//! The parsed value tree: [`Value`] and the ordered [`Object`] container.
//!
//! Objects are stored as `Vec<(String, Value)>` rather than a map so that
//! insertion order is preserved and observable — serialization and the
//! pretty printer iterate entries in the order they were built. Lookup is
//! linear and returns the first matching entry.

/// A node of the parsed JSON tree.
///
/// All numbers, integer-looking or not, collapse into a single `f64`
/// representation; the source distinction between `1` and `1.0` is lost.
/// Strings hold the decoded content (escape backslashes already stripped).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
    Boolean(bool),
    Null,
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(values)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

/// An ordered collection of key-value entries.
///
/// There are two construction paths with different uniqueness behavior,
/// and the asymmetry is part of the contract:
///
/// - [`insert`](Object::insert) and [`entry`](Object::entry) are
///   idempotent on the key: an existing entry is replaced in place and
///   order is unchanged, otherwise a new entry is appended.
/// - [`append`](Object::append) pushes a raw entry without checking for
///   duplicates. The parser builds objects this way, so a source document
///   with the same key twice produces two entries; [`find`](Object::find)
///   returns the first.
#[derive(Debug, Clone, Default)]
pub struct Object {
    entries: Vec<(String, Value)>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// First entry with the given key, if any.
    pub fn find(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Mutable version of [`find`](Object::find).
    pub fn find_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Upsert access: returns the value for `key`, appending a `Null`
    /// entry first if the key is absent.
    pub fn entry(&mut self, key: &str) -> &mut Value {
        let index = match self.entries.iter().position(|(k, _)| k == key) {
            Some(index) => index,
            None => {
                self.entries.push((key.to_string(), Value::Null));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    /// Keyed upsert: replaces the first entry with this key in place, or
    /// appends a new one.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        *self.entry(key) = value.into();
    }

    /// Raw entry push. Does not check for an existing entry with the same
    /// key; duplicates coexist and [`find`](Object::find) returns the
    /// first.
    pub fn append(&mut self, key: String, value: Value) {
        self.entries.push((key, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Structural equality with first-match key semantics: same entry count,
/// and every left entry equals the first right entry carrying its key.
/// Entry order is deliberately not compared. Note that this makes
/// equality non-reflexive for objects holding duplicate keys with
/// differing values, matching the lookup contract.
impl PartialEq for Object {
    fn eq(&self, other: &Object) -> bool {
        if self.entries.len() != other.entries.len() {
            return false;
        }
        self.entries
            .iter()
            .all(|(key, value)| other.find(key) == Some(value))
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Object {
            entries: iter.into_iter().collect(),
        }
    }
}
