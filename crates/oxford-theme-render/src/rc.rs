//! Runtime configuration parameters pushed into the host.
//!
//! Hosts keep a process-wide dictionary of style keys (`axes.labelcolor`,
//! `font.size`, ...). [`RcParams`] is the typed form of a batch of updates
//! to that dictionary.

use std::collections::BTreeMap;
use std::fmt;

/// A single configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum RcValue {
    /// A boolean switch.
    Bool(bool),
    /// A numeric value (sizes, alphas).
    Number(f64),
    /// A color, as a hex string or a host color name.
    Color(String),
    /// Free-form text (font family names, style keywords).
    Text(String),
    /// A list of strings (font fallback stacks).
    List(Vec<String>),
    /// A property cycle of colors, in order.
    ColorCycle(Vec<String>),
}

impl RcValue {
    /// Return the number, if this is a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Return the string payload of color and text values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Color(s) | Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Return the bool, if this is a switch.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Return the list payload of list and cycle values.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) | Self::ColorCycle(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for RcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Color(s) | Self::Text(s) => f.write_str(s),
            Self::List(items) => write!(f, "{}", items.join(", ")),
            Self::ColorCycle(items) => write!(f, "cycler('color', [{}])", items.join(", ")),
        }
    }
}

/// An ordered batch of configuration values keyed by host parameter name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RcParams {
    values: BTreeMap<String, RcValue>,
}

impl RcParams {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous one.
    pub fn set(&mut self, key: impl Into<String>, value: RcValue) {
        self.values.insert(key.into(), value);
    }

    /// Get a value.
    pub fn get(&self, key: &str) -> Option<&RcValue> {
        self.values.get(key)
    }

    /// Get a numeric value.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(RcValue::as_number)
    }

    /// Check if a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Copy every entry of `other` over this batch. Later values win.
    pub fn update(&mut self, other: &RcParams) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RcValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<K: Into<String>> FromIterator<(K, RcValue)> for RcParams {
    fn from_iter<I: IntoIterator<Item = (K, RcValue)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}
