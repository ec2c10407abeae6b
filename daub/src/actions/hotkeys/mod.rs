//! Keyboard hotkeys.
//!
//! Actions can have potentially many hotkeys bound to them, and hotkeys can be bound to at most one action.
//! Mapping in both directions is useful, but for disk storage the one-to-many relation of Actions to keys is
//! easier to edit for the end user. Thus, the reverse many-to-one mapping of keys to actions is built dynamically.

mod defaults;

use super::Action;

pub trait HotkeyShadow {
    type Other;
    /// Returns true if this hotkey is "more specific" than the other,
    /// i.e. uses the same key but has stricter modifiers.
    fn shadows(&self, other: &Self::Other) -> bool;
}

#[derive(Hash, PartialEq, Eq, Clone, Debug, Copy)]
pub struct KeyboardHotkey {
    /// Control, or Command on mac.
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub key: egui::Key,
}
impl serde::Serialize for KeyboardHotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // A string, so the file stays readable.
        serializer.collect_str(self)
    }
}
impl<'de> serde::Deserialize<'de> for KeyboardHotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // delegate to FromStr from a borrowed or owned string, depending on capabilities of deserializer.
        let str =
            <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        str.parse().map_err(serde::de::Error::custom)
    }
}
impl KeyboardHotkey {
    /// The hotkey a key press with these modifiers would trigger, if bound exactly.
    #[must_use]
    pub fn from_event(key: egui::Key, modifiers: egui::Modifiers) -> Self {
        Self {
            ctrl: modifiers.command,
            alt: modifiers.alt,
            shift: modifiers.shift,
            key,
        }
    }
    /// Get an arbitrary score of how specific this key is -
    /// Hotkeys with higher specificity shadow those with lower.
    #[must_use]
    pub fn specificity(&self) -> u8 {
        u8::from(self.ctrl) + u8::from(self.alt) + u8::from(self.shift)
    }
}
/// Formatted correctly for [`std::str::FromStr`].
impl std::fmt::Display for KeyboardHotkey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut components = smallvec::SmallVec::<[&'static str; 4]>::new();
        if self.ctrl {
            components.push("ctrl");
        }
        if self.alt {
            components.push("alt");
        }
        if self.shift {
            components.push("shift");
        };
        components.push(self.key.name());
        f.write_str(&components.join("+"))
    }
}
#[derive(Debug, thiserror::Error)]
pub enum KeyboardHotkeyFromStrError {
    #[error("unrecognized key name {0:?}")]
    InvalidKeyName(String),
}
/// Parse from sytax `[ctrl+][alt+][shift+]<egui key name>`, case-sensitive.
impl std::str::FromStr for KeyboardHotkey {
    type Err = KeyboardHotkeyFromStrError;
    fn from_str(mut str: &str) -> Result<Self, Self::Err> {
        let mut take_if_has = |prefix: &str| -> bool {
            if let Some(new_str) = str.strip_prefix(prefix) {
                str = new_str;
                true
            } else {
                false
            }
        };
        let ctrl = take_if_has("ctrl+");
        let alt = take_if_has("alt+");
        let shift = take_if_has("shift+");
        // str now contains only the key name.
        // `from_name` is lenient about case and aliases. Only the canonical spelling is accepted.
        let key = egui::Key::from_name(str)
            .filter(|key| key.name() == str)
            .ok_or_else(|| KeyboardHotkeyFromStrError::InvalidKeyName(str.to_owned()))?;

        Ok(Self {
            ctrl,
            alt,
            shift,
            key,
        })
    }
}
impl HotkeyShadow for KeyboardHotkey {
    type Other = Self;
    fn shadows(&self, other: &Self::Other) -> bool {
        other.key == self.key
            && (other.ctrl <= self.ctrl && other.alt <= self.alt && other.shift <= self.shift)
    }
}

/// Maps each action onto potentially many hotkeys.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ActionsToKeys(hashbrown::HashMap<Action, Vec<KeyboardHotkey>>);
impl Default for ActionsToKeys {
    fn default() -> Self {
        let keys_map = defaults::KEYBOARD
            .iter()
            .map(|(action, keys)| (*action, keys.to_vec()))
            .collect();

        let new = Self(keys_map);
        // Make sure we didn't accidentally bind a single key twice
        debug_assert!(TryInto::<KeysToActions>::try_into(&new).is_ok());
        new
    }
}
impl ActionsToKeys {
    /// Keys bound to this action, if any.
    #[must_use]
    pub fn keys_of(&self, action: Action) -> &[KeyboardHotkey] {
        self.0.get(&action).map_or(&[], Vec::as_slice)
    }
}

/// Derived from [`ActionsToKeys`], maps each hotkey onto at most one action.
#[derive(Debug, Default)]
pub struct KeysToActions(hashbrown::HashMap<KeyboardHotkey, Action>);
#[derive(thiserror::Error, Debug)]
pub enum KeysToActionsError {
    /// A single key was bound to multiple actions.
    /// Only the first two encountered (in arbitrary order) are reported.
    #[error("hotkey {key} used for more than one action: {actions:?}")]
    DuplicateBinding {
        key: KeyboardHotkey,
        actions: [Action; 2],
    },
}
impl TryFrom<&ActionsToKeys> for KeysToActions {
    type Error = KeysToActionsError;
    fn try_from(value: &ActionsToKeys) -> Result<Self, Self::Error> {
        let mut new = KeysToActions(hashbrown::HashMap::default());

        for (action, keys) in &value.0 {
            for key in keys {
                let old = new.0.insert(*key, *action);
                // The slot wasn't empty!
                if let Some(old) = old {
                    // Binding the same key twice to the same action is harmless.
                    if old != *action {
                        return Err(KeysToActionsError::DuplicateBinding {
                            key: *key,
                            actions: [*action, old],
                        });
                    }
                }
            }
        }

        Ok(new)
    }
}
impl KeysToActions {
    /// The action bound to exactly this hotkey.
    pub fn action_of(&self, key: &KeyboardHotkey) -> Option<Action> {
        self.0.get(key).copied()
    }
    /// The action a key press should trigger. An exact binding wins, otherwise the most specific
    /// binding of the same key that the pressed modifiers shadow. Symbol keys often need shift just
    /// to be typed, so "Plus" still answers to shift+Plus.
    pub fn action_of_press(&self, pressed: &KeyboardHotkey) -> Option<Action> {
        self.action_of(pressed).or_else(|| {
            self.0
                .iter()
                .filter(|(bound, _)| pressed.shadows(*bound))
                .max_by_key(|(bound, _)| bound.specificity())
                .map(|(_, action)| *action)
        })
    }
}
