use serde::{Deserialize, Serialize};

use crate::domain::scalar::Scalar;

/// Insertion-ordered `name -> value` mapping.
///
/// A `None` value is a bare flag (`rotate`), a `Some` value a named pair
/// (`by=90`). Used both for `set` options and for per-series style.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    entries: Vec<(String, Option<Scalar>)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern - add a bare flag
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.insert(name, None);
        self
    }

    /// Builder pattern - add a named value
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.insert(name, Some(value.into()));
        self
    }

    /// Re-inserting a name replaces its value but keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<Scalar>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Option<Scalar>> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Scalar>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Element of a `SettingValue::List`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum SettingItem {
    Scalar(Scalar),
    Map(Attributes),
}

impl From<Scalar> for SettingItem {
    fn from(value: Scalar) -> Self {
        SettingItem::Scalar(value)
    }
}

impl From<Attributes> for SettingItem {
    fn from(value: Attributes) -> Self {
        SettingItem::Map(value)
    }
}

/// Right-hand side of a settings entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum SettingValue {
    /// No value: `set grid`
    Flag,
    Scalar(Scalar),
    Map(Attributes),
    /// One `set` call per element, in order
    List(Vec<SettingItem>),
}

impl From<Scalar> for SettingValue {
    fn from(value: Scalar) -> Self {
        SettingValue::Scalar(value)
    }
}

impl From<Attributes> for SettingValue {
    fn from(value: Attributes) -> Self {
        SettingValue::Map(value)
    }
}

impl From<Vec<SettingItem>> for SettingValue {
    fn from(value: Vec<SettingItem>) -> Self {
        SettingValue::List(value)
    }
}

/// Ordered list of `(key, value)` settings.
///
/// Keys may repeat: gnuplot applies later `set` calls on top of earlier ones,
/// so the builders sometimes need the same key twice.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Settings {
    entries: Vec<(String, SettingValue)>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> &mut Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    pub fn flag(&mut self, key: impl Into<String>) -> &mut Self {
        self.entries.push((key.into(), SettingValue::Flag));
        self
    }

    /// First value stored under `key`
    pub fn get<'a>(&'a self, key: &'a str) -> Option<&'a SettingValue> {
        self.get_all(key).next()
    }

    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a SettingValue> + 'a {
        self.entries.iter().filter(move |(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
