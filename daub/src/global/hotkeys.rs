use crate::actions;

const DOCUMENTATION: &str = r#"# Daub hotkeys. You may edit this file, but be aware that formatting and comments will not
# be preserved, and all keys and values are case sensitive.

# Available actions are Undo, BrushSmaller, BrushLarger, Save, and Load.
# Keyboard hotkeys are written `[ctrl+][alt+][shift+]<egui key name>`, in that order.
# Each action may have many hotkeys associated with it, but each hotkey should only be used at most once.
# See https://docs.rs/egui/latest/egui/enum.Key.html for a list of key names.

# Examples:
# Undo = ["Z", "ctrl+Z"]
# Save = ["ctrl+S", "F2"]

"#;

#[must_use]
pub fn preferences_dir() -> Option<std::path::PathBuf> {
    let mut base_dir = dirs::preference_dir()?;
    base_dir.push(env!("CARGO_PKG_NAME"));
    Some(base_dir)
}

/// Where the hotkeys in use came from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Source {
    /// Read from the user's file.
    File,
    /// No file yet, or nowhere to keep one.
    Defaulted,
    /// The user's file exists but couldn't be used. It is left alone.
    Invalid,
}

pub struct Hotkeys {
    source: Source,
    pub actions_to_keys: actions::hotkeys::ActionsToKeys,
    pub keys_to_actions: actions::hotkeys::KeysToActions,
}
impl Hotkeys {
    const FILENAME: &'static str = "hotkeys.toml";
    /// Shared global hotkeys, saved and loaded from user preferences.
    /// (Or defaulted, if unavailable for some reason)
    #[must_use]
    pub fn get() -> &'static Self {
        static GLOBAL_HOTKEYS: std::sync::OnceLock<Hotkeys> = std::sync::OnceLock::new();

        GLOBAL_HOTKEYS.get_or_init(|| match preferences_dir() {
            None => {
                log::warn!("No preferences directory, using default hotkeys.");
                Self::defaulted(Source::Defaulted)
            }
            Some(mut path) => {
                path.push(Self::FILENAME);
                Self::load_or_default(&path)
            }
        })
    }
    #[must_use]
    pub fn defaulted(source: Source) -> Self {
        use actions::hotkeys::{ActionsToKeys, KeysToActions};
        let actions_to_keys = ActionsToKeys::default();
        // Default action map is reversable, checked by its Default impl in debug and by tests.
        let keys_to_actions = KeysToActions::try_from(&actions_to_keys).unwrap_or_else(|e| {
            log::error!("Default hotkeys conflict, hotkeys disabled: {e}");
            KeysToActions::default()
        });

        Self {
            source,
            keys_to_actions,
            actions_to_keys,
        }
    }
    #[must_use]
    pub fn load_or_default(path: &std::path::Path) -> Self {
        use actions::hotkeys::{ActionsToKeys, KeysToActions};
        let string = match std::fs::read_to_string(path) {
            Ok(string) => string,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No hotkeys at {}, using defaults.", path.display());
                return Self::defaulted(Source::Defaulted);
            }
            Err(e) => {
                log::warn!("Failed to read hotkeys at {}: {e}", path.display());
                return Self::defaulted(Source::Invalid);
            }
        };
        let mappings: anyhow::Result<(ActionsToKeys, KeysToActions)> = try_block::try_block! {
            let actions_to_keys : ActionsToKeys = toml::from_str(&string)?;
            let keys_to_actions : KeysToActions = (&actions_to_keys).try_into()?;

            Ok((actions_to_keys,keys_to_actions))
        };

        match mappings {
            Ok((actions_to_keys, keys_to_actions)) => Self {
                source: Source::File,
                actions_to_keys,
                keys_to_actions,
            },
            Err(e) => {
                log::warn!("Invalid hotkeys at {}, using defaults: {e:#}", path.display());
                Self::defaulted(Source::Invalid)
            }
        }
    }
    #[must_use]
    pub fn source(&self) -> Source {
        self.source
    }
    /// Whether writing these back would lose nothing the user wrote.
    #[must_use]
    pub fn should_save(&self) -> bool {
        self.source != Source::Invalid
    }
    pub fn save(&self) -> anyhow::Result<()> {
        let mut preferences =
            preferences_dir().ok_or_else(|| anyhow::anyhow!("No preferences dir found"))?;
        // Explicity do *not* create recursively. If not found, the user probably has a good reason.
        // Ignore errors (could already exist). Any real errors will be emitted by file access below.
        let _ = std::fs::DirBuilder::new().create(&preferences);

        preferences.push(Self::FILENAME);
        self.save_to(&preferences)
    }
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let mut string = toml::ser::to_string_pretty(&self.actions_to_keys)?;
        // Prefix some documentation.
        string = DOCUMENTATION.to_owned() + &string;
        std::fs::write(path, string)?;
        Ok(())
    }
}
