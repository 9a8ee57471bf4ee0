//! Mobile menu state and its scroll lock

use crate::error::Result;
use crate::models::Presentation;
use tracing::trace;

/// Open/closed flag for the mobile navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }
}

/// User interactions the header binds handlers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Burger button pressed
    ToggleClicked,
    /// Dismiss backdrop pressed
    BackdropClicked,
    /// Nav entry at this index followed
    LinkClicked(usize),
}

/// Page-level scroll lock applied while the menu is open
pub trait ScrollLock {
    fn set_scroll_locked(&mut self, locked: bool) -> Result<()>;
}

/// Owns MenuState and keeps the page scroll lock in step with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuController {
    state: MenuState,
    presentation: Presentation,
    scroll_locked: bool,
}

impl MenuController {
    pub fn new(presentation: Presentation) -> Self {
        Self {
            state: MenuState::Closed,
            presentation,
            scroll_locked: false,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    /// Backdrop visibility follows the menu on variants that have one
    pub fn backdrop_visible(&self) -> bool {
        self.presentation.has_backdrop() && self.is_open()
    }

    /// Open the menu; no-op when already open or when the variant has no toggle
    pub fn open<L: ScrollLock + ?Sized>(&mut self, lock: &mut L) -> Result<MenuState> {
        if !self.presentation.has_toggle() || self.is_open() {
            return Ok(self.state);
        }
        self.apply_lock(true, lock)?;
        self.state = MenuState::Open;
        trace!(presentation = %self.presentation, "menu opened");
        Ok(self.state)
    }

    /// Close the menu and release the scroll lock; no-op when already closed
    pub fn close<L: ScrollLock + ?Sized>(&mut self, lock: &mut L) -> Result<MenuState> {
        if !self.is_open() {
            return Ok(self.state);
        }
        self.apply_lock(false, lock)?;
        self.state = MenuState::Closed;
        trace!(presentation = %self.presentation, "menu closed");
        Ok(self.state)
    }

    pub fn toggle<L: ScrollLock + ?Sized>(&mut self, lock: &mut L) -> Result<MenuState> {
        if self.is_open() {
            self.close(lock)
        } else {
            self.open(lock)
        }
    }

    /// Dispatch a bound UI event
    pub fn handle<L: ScrollLock + ?Sized>(
        &mut self,
        event: UiEvent,
        lock: &mut L,
    ) -> Result<MenuState> {
        match event {
            UiEvent::ToggleClicked => self.toggle(lock),
            UiEvent::BackdropClicked | UiEvent::LinkClicked(_) => self.close(lock),
        }
    }

    fn apply_lock<L: ScrollLock + ?Sized>(&mut self, locked: bool, lock: &mut L) -> Result<()> {
        if !self.presentation.locks_scroll() || self.scroll_locked == locked {
            return Ok(());
        }
        lock.set_scroll_locked(locked)?;
        self.scroll_locked = locked;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeaderError;

    #[derive(Default)]
    struct RecordingLock {
        calls: Vec<bool>,
        fail: bool,
    }

    impl ScrollLock for RecordingLock {
        fn set_scroll_locked(&mut self, locked: bool) -> Result<()> {
            if self.fail {
                return Err(HeaderError::host("scroll lock", "body missing"));
            }
            self.calls.push(locked);
            Ok(())
        }
    }

    #[test]
    fn test_toggle_even_times_returns_closed_and_unlocked() {
        let mut lock = RecordingLock::default();
        let mut menu = MenuController::new(Presentation::Sheet);

        for _ in 0..4 {
            menu.toggle(&mut lock).unwrap();
        }

        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!menu.scroll_locked());
        assert_eq!(lock.calls, vec![true, false, true, false]);
    }

    #[test]
    fn test_open_locks_and_shows_backdrop() {
        let mut lock = RecordingLock::default();
        let mut menu = MenuController::new(Presentation::Drawer);

        assert_eq!(menu.open(&mut lock).unwrap(), MenuState::Open);
        assert!(menu.scroll_locked());
        assert!(menu.backdrop_visible());

        // second open is a no-op
        menu.open(&mut lock).unwrap();
        assert_eq!(lock.calls, vec![true]);
    }

    #[test]
    fn test_backdrop_and_link_close() {
        let mut lock = RecordingLock::default();
        let mut menu = MenuController::new(Presentation::Sheet);

        menu.handle(UiEvent::ToggleClicked, &mut lock).unwrap();
        menu.handle(UiEvent::BackdropClicked, &mut lock).unwrap();
        assert!(!menu.is_open());
        assert!(!menu.scroll_locked());

        menu.handle(UiEvent::ToggleClicked, &mut lock).unwrap();
        menu.handle(UiEvent::LinkClicked(2), &mut lock).unwrap();
        assert!(!menu.is_open());
        assert!(!menu.scroll_locked());
    }

    #[test]
    fn test_overlay_has_no_backdrop_but_locks() {
        let mut lock = RecordingLock::default();
        let mut menu = MenuController::new(Presentation::Overlay);

        menu.toggle(&mut lock).unwrap();
        assert!(menu.is_open());
        assert!(menu.scroll_locked());
        assert!(!menu.backdrop_visible());
    }

    #[test]
    fn test_variants_without_toggle_ignore_events() {
        for presentation in [Presentation::Bar, Presentation::Dock] {
            let mut lock = RecordingLock::default();
            let mut menu = MenuController::new(presentation);
            menu.handle(UiEvent::ToggleClicked, &mut lock).unwrap();
            menu.handle(UiEvent::BackdropClicked, &mut lock).unwrap();
            assert_eq!(menu.state(), MenuState::Closed);
            assert!(lock.calls.is_empty());
        }
    }

    #[test]
    fn test_failed_lock_leaves_state_untouched() {
        let mut lock = RecordingLock {
            fail: true,
            ..Default::default()
        };
        let mut menu = MenuController::new(Presentation::Sheet);

        assert!(menu.toggle(&mut lock).is_err());
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!menu.scroll_locked());
    }
}
