//! Keyboard state to paddle intent

use std::collections::{HashMap, HashSet};

use crate::sim::TickInput;

/// Key names that steer the paddle left
pub const LEFT_KEYS: [&str; 2] = ["ArrowLeft", "Left"];
/// Key names that steer the paddle right
pub const RIGHT_KEYS: [&str; 2] = ["ArrowRight", "Right"];

/// Pressed-state lookup by key name, sampled once per frame
pub trait KeyLookup {
    fn is_pressed(&self, key: &str) -> bool;

    fn any_pressed(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.is_pressed(k))
    }
}

impl KeyLookup for HashMap<String, bool> {
    fn is_pressed(&self, key: &str) -> bool {
        self.get(key).copied().unwrap_or(false)
    }
}

impl KeyLookup for HashMap<&str, bool> {
    fn is_pressed(&self, key: &str) -> bool {
        self.get(key).copied().unwrap_or(false)
    }
}

/// A set of currently held keys
impl KeyLookup for HashSet<String> {
    fn is_pressed(&self, key: &str) -> bool {
        self.contains(key)
    }
}

impl TickInput {
    /// Sample direction keys. Both directions held resolves to left in
    /// [`TickInput::direction`].
    pub fn from_keys(keys: &impl KeyLookup) -> Self {
        Self {
            left: keys.any_pressed(&LEFT_KEYS),
            right: keys.any_pressed(&RIGHT_KEYS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(pressed: &[&'static str]) -> HashMap<&'static str, bool> {
        pressed.iter().map(|k| (*k, true)).collect()
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(TickInput::from_keys(&keys(&["ArrowLeft"])).direction(), -1.0);
        assert_eq!(TickInput::from_keys(&keys(&["ArrowRight"])).direction(), 1.0);
        assert_eq!(TickInput::from_keys(&keys(&[])).direction(), 0.0);
    }

    #[test]
    fn test_legacy_key_names() {
        assert_eq!(TickInput::from_keys(&keys(&["Left"])).direction(), -1.0);
        assert_eq!(TickInput::from_keys(&keys(&["Right"])).direction(), 1.0);
    }

    #[test]
    fn test_left_wins_when_both_held() {
        let input = TickInput::from_keys(&keys(&["ArrowLeft", "ArrowRight"]));
        assert!(input.left && input.right);
        assert_eq!(input.direction(), -1.0);
    }

    #[test]
    fn test_released_keys_are_not_pressed() {
        let mut map: HashMap<String, bool> = HashMap::new();
        map.insert("ArrowLeft".to_string(), false);
        map.insert("ArrowRight".to_string(), true);
        assert_eq!(TickInput::from_keys(&map).direction(), 1.0);
    }

    #[test]
    fn test_key_set() {
        let set: HashSet<String> = ["Left".to_string()].into_iter().collect();
        assert_eq!(TickInput::from_keys(&set).direction(), -1.0);
    }
}
