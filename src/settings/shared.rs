//! A registry shared between several configurators.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::StyleResult;

use super::{PlotSettings, SettingValue, SettingsMap, SettingsSink};

/// Handle to a [`PlotSettings`] registry shared by cloning.
///
/// Every clone sees the writes of every other clone, so configurators built
/// on clones of one handle overwrite each other's effects (last write wins).
#[derive(Debug, Clone, Default)]
pub struct SharedSettings(Rc<RefCell<PlotSettings>>);

impl SharedSettings {
    pub fn new(settings: PlotSettings) -> Self {
        SharedSettings(Rc::new(RefCell::new(settings)))
    }

    pub fn snapshot(&self) -> SettingsMap {
        self.0.borrow().snapshot()
    }
}

impl SettingsSink for SharedSettings {
    fn get(&self, key: &str) -> StyleResult<SettingValue> {
        self.0.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: SettingValue) -> StyleResult<()> {
        self.0.borrow_mut().set(key, value)
    }

    fn restore_defaults(&mut self) {
        self.0.borrow_mut().restore_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::keys;

    #[test]
    fn test_clones_share_writes() {
        let mut a = SharedSettings::default();
        let b = a.clone();
        a.set(keys::FONT_SIZE, 20.0.into()).unwrap();
        assert_eq!(b.get(keys::FONT_SIZE).unwrap(), SettingValue::Float(20.0));
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
