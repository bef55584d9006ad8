//! A locally cached value with read-through fallback.

use crate::error::StyleResult;

/// A property value that is either explicitly set or read through a fallback.
///
/// The fallback result is never stored: every read of an unset value calls
/// the fallback again.
#[derive(Debug, Clone, PartialEq)]
pub struct Overridable<T> {
    value: Option<T>,
}

impl<T> Default for Overridable<T> {
    fn default() -> Self {
        Overridable { value: None }
    }
}

impl<T: Clone> Overridable<T> {
    /// The override if one is set, otherwise whatever `fallback` returns.
    pub fn value<F>(&self, fallback: F) -> StyleResult<T>
    where
        F: FnOnce() -> StyleResult<T>,
    {
        match &self.value {
            Some(v) => Ok(v.clone()),
            None => fallback(),
        }
    }

    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn clear(&mut self) {
        self.value = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_fallback_is_not_cached() {
        let calls = Cell::new(0);
        let prop: Overridable<f64> = Overridable::default();
        let fallback = || {
            calls.set(calls.get() + 1);
            Ok(2.5)
        };
        assert_eq!(prop.value(fallback).unwrap(), 2.5);
        assert_eq!(prop.value(fallback).unwrap(), 2.5);
        assert_eq!(calls.get(), 2);
        assert!(!prop.is_set());
    }

    #[test]
    fn test_override_wins_until_cleared() {
        let mut prop = Overridable::default();
        prop.set(4.0);
        assert_eq!(prop.value(|| Ok(1.0)).unwrap(), 4.0);
        assert_eq!(prop.get(), Some(&4.0));
        prop.clear();
        assert_eq!(prop.value(|| Ok(1.0)).unwrap(), 1.0);
    }
}
