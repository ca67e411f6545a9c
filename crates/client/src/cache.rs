//! Client-side cache for the library list.

use std::sync::Mutex;

use romshelf_core::game::Game;

/// A cached copy of `GET /api/games`, invalidated by mutations.
///
/// Owned by [`crate::GamesClient`] rather than living in module-level
/// state, so two clients never share or clobber each other's cache.
#[derive(Debug, Default)]
pub struct ListCache {
    inner: Mutex<Option<Vec<Game>>>,
}

impl ListCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached list, if one is held.
    pub fn get(&self) -> Option<Vec<Game>> {
        self.inner.lock().expect("cache lock poisoned").clone()
    }

    /// Replace the cached list with a fresh fetch result.
    pub fn store(&self, games: Vec<Game>) {
        *self.inner.lock().expect("cache lock poisoned") = Some(games);
    }

    /// Drop the cached list so the next read refetches.
    pub fn invalidate(&self) {
        *self.inner.lock().expect("cache lock poisoned") = None;
    }
}
