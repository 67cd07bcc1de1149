//! Key/value records describing a single step or trial.
use crate::error::SmartcabError;
use std::collections::HashMap;

/// Values that can be stored in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single floating-point value, like a reward or the exploration rate.
    Scalar(f32),

    /// A text value, like the name of the chosen action.
    String(String),
}

/// A container for storing key-value pairs of [`RecordValue`]s.
///
/// # Examples
///
/// ```rust
/// use smartcab_core::record::{Record, RecordValue};
///
/// let mut record = Record::from_scalar("reward", 2.0);
/// record.insert("action", RecordValue::String("forward".to_string()));
///
/// assert_eq!(record.get_scalar("reward").unwrap(), 2.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        Self(HashMap::from([(name.into(), RecordValue::Scalar(value))]))
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Merges two records, consuming both.
    ///
    /// If both records contain the same key, the value from `record` wins.
    pub fn merge(self, record: Record) -> Self {
        Record(self.0.into_iter().chain(record.0).collect())
    }

    /// Gets a scalar value from the record.
    ///
    /// # Errors
    ///
    /// Fails if the key does not exist or the value is not a scalar.
    pub fn get_scalar(&self, k: &str) -> Result<f32, SmartcabError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(SmartcabError::RecordValueTypeError("Scalar".to_string())),
            None => Err(SmartcabError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a string value from the record.
    ///
    /// # Errors
    ///
    /// Fails if the key does not exist or the value is not a string.
    pub fn get_string(&self, k: &str) -> Result<String, SmartcabError> {
        match self.0.get(k) {
            Some(RecordValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(SmartcabError::RecordValueTypeError("String".to_string())),
            None => Err(SmartcabError::RecordKeyError(k.to_string())),
        }
    }

    /// Checks if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_scalar_and_string() {
        let record = Record::from_slice(&[
            ("reward", RecordValue::Scalar(-0.5)),
            ("action", RecordValue::String("left".to_string())),
        ]);

        assert_eq!(record.len(), 2);
        assert_eq!(record.get_scalar("reward").unwrap(), -0.5);
        assert_eq!(record.get_string("action").unwrap(), "left");
        assert_eq!(
            record.get_scalar("action"),
            Err(SmartcabError::RecordValueTypeError("Scalar".to_string()))
        );
        assert_eq!(
            record.get_string("epsilon"),
            Err(SmartcabError::RecordKeyError("epsilon".to_string()))
        );
    }

    #[test]
    fn test_merge_prefers_second() {
        let a = Record::from_scalar("epsilon", 1.0);
        let mut b = Record::from_scalar("epsilon", 0.5);
        b.insert("alpha", RecordValue::Scalar(0.25));

        let merged = a.merge(b);
        assert_eq!(merged.get_scalar("epsilon").unwrap(), 0.5);
        assert_eq!(merged.get_scalar("alpha").unwrap(), 0.25);
        assert!(!merged.is_empty());
        assert!(Record::empty().is_empty());
    }
}
