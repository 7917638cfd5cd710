use crate::models::theme::{ThemeMode, DARK_MARKER, DARK_MODE_KEY};
use crate::services::preferences::PreferenceStore;

use super::mapper::{format_dark_mode, parse_dark_mode};
use super::target::ThemeTarget;

/// Owns the dark-mode flag and keeps the stored value and the applied
/// marker in step.
///
/// Both collaborators are injected so the same service runs against SQLite
/// in the binary and an in-memory store in tests.
pub struct ThemePreference<S, T> {
    store: S,
    target: T,
    mode: ThemeMode,
}

impl<S: PreferenceStore, T: ThemeTarget> ThemePreference<S, T> {
    /// Read the persisted flag and apply it.
    ///
    /// A missing, unreadable or malformed value falls back to light mode. The
    /// resolved value is written back so storage and target agree from the
    /// start.
    pub fn load(store: S, target: T) -> Self {
        let mode = ThemeMode::from_dark_mode(read_dark_mode(&store));
        log::info!("Loaded theme preference: {}", mode.name());

        let mut preference = Self {
            store,
            target,
            mode,
        };
        preference.apply();
        preference
    }

    /// Current dark-mode flag
    pub fn get(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip between light and dark, persisting and applying the new mode.
    pub fn toggle(&mut self) {
        self.set_dark_mode(self.mode.toggled().is_dark());
    }

    /// Setting the current value again is harmless: the write and the
    /// marker update both converge on the same end state.
    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.mode = ThemeMode::from_dark_mode(dark_mode);
        log::debug!("Theme set to {}", self.mode.name());
        self.apply();
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_parts(self) -> (S, T) {
        (self.store, self.target)
    }

    fn apply(&mut self) {
        let dark_mode = self.get();

        // Storage failures are not retried; the in-memory mode still changes.
        if let Err(e) = self
            .store
            .write(DARK_MODE_KEY, &format_dark_mode(dark_mode))
        {
            log::warn!("Failed to persist theme preference: {:#}", e);
        }

        if dark_mode {
            self.target.add_marker(DARK_MARKER);
        } else {
            self.target.remove_marker(DARK_MARKER);
        }
    }
}

fn read_dark_mode<S: PreferenceStore>(store: &S) -> bool {
    match store.read(DARK_MODE_KEY) {
        Ok(Some(text)) => parse_dark_mode(&text).unwrap_or_else(|| {
            log::warn!(
                "Ignoring malformed theme preference {:?}, using light mode",
                text
            );
            false
        }),
        Ok(None) => false,
        Err(e) => {
            log::warn!("Failed to read theme preference: {:#}, using light mode", e);
            false
        }
    }
}
