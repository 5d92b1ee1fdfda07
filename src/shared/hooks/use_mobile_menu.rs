//! Mobile menu state with a page scroll lock.
//!
//! While the mobile dropdown is open the page behind it must not scroll.
//! The suppression flag is process-wide (mirrored into a
//! `mobile-menu-open` class on `document.body` in the browser) and is
//! wrapped in an RAII [`ScrollLock`] so it is released on every exit
//! path: toggling the menu closed, selecting a link, or tearing the
//! component down.
//!
//! Contract: at most one header instance exists per page. A second
//! concurrent instance would race on the same flag.

use dioxus::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide scroll-suppression flag. Only [`ScrollLock`] touches it.
static SCROLL_SUPPRESSED: AtomicBool = AtomicBool::new(false);

/// Guard for the page scroll lock. Acquiring sets the suppression flag
/// and adds the body class; dropping clears both.
pub struct ScrollLock(());

impl ScrollLock {
    pub fn acquire() -> Self {
        SCROLL_SUPPRESSED.store(true, Ordering::SeqCst);
        set_body_menu_class(true);
        ScrollLock(())
    }

    /// Whether page scroll is currently suppressed.
    pub fn is_engaged() -> bool {
        SCROLL_SUPPRESSED.load(Ordering::SeqCst)
    }

    /// Clear the flag unconditionally, whether or not a guard is live.
    /// Teardown path: must run even when no state transition happened.
    pub fn force_release() {
        SCROLL_SUPPRESSED.store(false, Ordering::SeqCst);
        set_body_menu_class(false);
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        Self::force_release();
    }
}

#[cfg(target_arch = "wasm32")]
fn set_body_menu_class(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let class_list = body.class_list();
        let _ = if locked {
            class_list.add_1("mobile-menu-open")
        } else {
            class_list.remove_1("mobile-menu-open")
        };
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_body_menu_class(_locked: bool) {
    // No body to lock on the server
}

/// Open/closed state of the mobile dropdown. Open means the scroll lock
/// is held.
#[derive(Default)]
pub struct MenuState {
    lock: Option<ScrollLock>,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.lock.is_some()
    }

    /// Flip closed<->open. Opening acquires the scroll lock, closing
    /// releases it.
    pub fn toggle(&mut self) {
        match self.lock.take() {
            Some(lock) => drop(lock),
            None => self.lock = Some(ScrollLock::acquire()),
        }
    }

    /// Selecting a destination always collapses the menu and restores
    /// scrolling, regardless of prior state.
    pub fn select_link(&mut self) {
        self.lock = None;
    }

    /// Idempotent teardown. Clears the process-wide flag even if no lock
    /// is tracked, so the flag cannot outlive the component that set it.
    pub fn dispose(&mut self) {
        self.lock = None;
        ScrollLock::force_release();
    }
}

/// Hook owning the mobile menu state for the header. The `use_drop`
/// teardown runs when the header unmounts, including while the menu is
/// still open.
pub fn use_mobile_menu() -> Signal<MenuState> {
    let mut menu = use_signal(MenuState::default);
    use_drop(move || menu.write().dispose());
    menu
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // The suppression flag is process-wide, so tests touching it cannot
    // run in parallel.
    static FLAG_TESTS: Mutex<()> = Mutex::new(());

    fn lock_tests() -> std::sync::MutexGuard<'static, ()> {
        FLAG_TESTS.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_toggle_opens_and_engages_lock() {
        let _guard = lock_tests();
        let mut menu = MenuState::default();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());
        assert!(ScrollLock::is_engaged());

        menu.dispose();
    }

    #[test]
    fn test_double_toggle_round_trips_to_closed() {
        let _guard = lock_tests();
        let mut menu = MenuState::default();

        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
        assert!(!ScrollLock::is_engaged());
    }

    #[test]
    fn test_select_link_collapses_from_open() {
        let _guard = lock_tests();
        let mut menu = MenuState::default();

        menu.toggle();
        menu.select_link();
        assert!(!menu.is_open());
        assert!(!ScrollLock::is_engaged());
    }

    #[test]
    fn test_select_link_noop_when_closed_but_scroll_restored() {
        let _guard = lock_tests();
        let mut menu = MenuState::default();

        menu.select_link();
        assert!(!menu.is_open());
        assert!(!ScrollLock::is_engaged());
    }

    #[test]
    fn test_dispose_clears_flag_while_open() {
        let _guard = lock_tests();
        let mut menu = MenuState::default();

        menu.toggle();
        assert!(ScrollLock::is_engaged());

        menu.dispose();
        assert!(!ScrollLock::is_engaged());
    }

    #[test]
    fn test_dispose_is_unconditional_and_idempotent() {
        let _guard = lock_tests();

        // Simulate a leaked flag with no tracked lock
        SCROLL_SUPPRESSED.store(true, Ordering::SeqCst);
        let mut menu = MenuState::default();
        menu.dispose();
        assert!(!ScrollLock::is_engaged());

        menu.dispose();
        assert!(!ScrollLock::is_engaged());
    }

    #[test]
    fn test_dropping_open_state_releases_lock() {
        let _guard = lock_tests();

        {
            let mut menu = MenuState::default();
            menu.toggle();
            assert!(ScrollLock::is_engaged());
        }
        assert!(!ScrollLock::is_engaged());
    }
}
