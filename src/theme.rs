//! Light/dark theme state.
//!
//! [`ThemeState`] is the single owner of the current theme. Consumers that
//! render differently per theme (the document attribute, the toggle icon, the
//! particle renderer) subscribe to changes instead of polling shared state.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(Error::UnknownTheme(other.to_owned())),
        }
    }
}

/// Persistent key-value storage for the preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used when no browser storage is available and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<(String, String)>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_owned(),
            None => self.entries.push((key.to_owned(), value.to_owned())),
        }
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

type Listener = Box<dyn FnMut(Theme)>;

pub struct ThemeState<S> {
    store: S,
    key: String,
    current: Theme,
    listeners: Vec<Listener>,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Read the persisted preference under `key`. Missing or unrecognized
    /// values fall back to [`Theme::Dark`].
    pub fn load(store: S, key: &str) -> Self {
        let current = match store.get(key).map(|v| v.parse::<Theme>()) {
            Some(Ok(theme)) => theme,
            Some(Err(err)) => {
                log::warn!("ignoring stored theme: {err}");
                Theme::default()
            }
            None => Theme::default(),
        };
        Self { store, key: key.to_owned(), current, listeners: Vec::new() }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a listener and call it immediately with the current theme.
    pub fn subscribe(&mut self, mut listener: impl FnMut(Theme) + 'static) {
        listener(self.current);
        self.listeners.push(Box::new(listener));
    }

    /// Flip the theme, persist it and notify every listener.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.flipped());
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.store.set(&self.key, theme.as_str());
        for listener in &mut self.listeners {
            listener(theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn defaults_to_dark() {
        let state = ThemeState::load(MemoryStore::default(), "theme");
        assert_eq!(state.current(), Theme::Dark);
    }

    #[test]
    fn garbage_falls_back_to_dark() {
        let mut store = MemoryStore::default();
        store.set("theme", "sepia");
        assert_eq!(ThemeState::load(store, "theme").current(), Theme::Dark);
    }

    #[test]
    fn toggle_alternates_and_persists() {
        let mut state = ThemeState::load(MemoryStore::default(), "theme");
        let mut seen = Vec::new();
        for _ in 0..4 {
            state.toggle();
            seen.push(state.store().get("theme").unwrap());
        }
        assert_eq!(seen, ["light", "dark", "light", "dark"]);
    }

    #[test]
    fn reload_restores_last_value() {
        let mut state = ThemeState::load(MemoryStore::default(), "theme");
        state.toggle();
        let store = state.store().clone();
        assert_eq!(ThemeState::load(store, "theme").current(), Theme::Light);
    }

    #[test]
    fn listeners_see_every_change() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut state = ThemeState::load(MemoryStore::default(), "theme");
        let sink = Rc::clone(&log);
        state.subscribe(move |t| sink.borrow_mut().push(t));
        state.toggle();
        state.toggle();
        assert_eq!(*log.borrow(), [Theme::Dark, Theme::Light, Theme::Dark]);
    }

    #[test]
    fn parse() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!(matches!("Dark".parse::<Theme>(), Err(Error::UnknownTheme(_))));
    }
}
