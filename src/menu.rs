// ABOUTME: Mobile menu behavior for the hero-slideshow crate
// ABOUTME: Open/close state, body scroll lock and a keyboard focus trap

use log::debug;

/// Opaque handle for a focusable element
pub type FocusId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Escape,
    Other,
}

/// What the keydown handler did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Let the browser handle the key
    Ignored,
    /// Focus wrapped inside the menu; the default action must be prevented
    Wrapped(FocusId),
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MobileMenu {
    close_button: FocusId,
    focusables: Vec<FocusId>,
    open: bool,
    previous_focus: Option<FocusId>,
    focused: Option<FocusId>,
}

impl MobileMenu {
    /// `focusables` is the menu's tab order; it must include `close_button`.
    pub fn new(close_button: FocusId, focusables: Vec<FocusId>) -> Self {
        Self {
            close_button,
            focusables,
            open: false,
            previous_focus: None,
            focused: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value of the toggle's `aria-expanded` attribute
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Body `overflow` style; scrolling is locked while open
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }

    pub fn focused(&self) -> Option<FocusId> {
        self.focused
    }

    /// Open the menu, remembering where focus was and moving it to the close button.
    pub fn open(&mut self, current_focus: Option<FocusId>) {
        if self.open {
            return;
        }
        self.previous_focus = current_focus;
        self.open = true;
        self.focused = Some(self.close_button);
        debug!("Mobile menu opened");
    }

    /// Close the menu and hand focus back. Returns the restored element.
    pub fn close(&mut self) -> Option<FocusId> {
        if !self.open {
            return self.focused;
        }
        self.open = false;
        self.focused = self.previous_focus.take();
        debug!("Mobile menu closed");
        self.focused
    }

    /// Clicking a menu link navigates and closes the menu.
    pub fn activate_link(&mut self) -> Option<FocusId> {
        self.close()
    }

    /// Keydown handler; only installed while the menu is open.
    ///
    /// `focused` is the element holding focus when the key went down. Tab
    /// presses that don't wrap are left to the browser.
    pub fn handle_key(&mut self, key: Key, shift: bool, focused: Option<FocusId>) -> KeyOutcome {
        if !self.open {
            return KeyOutcome::Ignored;
        }
        self.focused = focused;
        match key {
            Key::Escape => {
                self.close();
                KeyOutcome::Closed
            }
            Key::Tab => {
                let (Some(&first), Some(&last)) = (self.focusables.first(), self.focusables.last())
                else {
                    return KeyOutcome::Ignored;
                };
                let wrap_to = match (shift, focused) {
                    (true, Some(current)) if current == first => last,
                    (false, Some(current)) if current == last => first,
                    _ => return KeyOutcome::Ignored,
                };
                self.focused = Some(wrap_to);
                KeyOutcome::Wrapped(wrap_to)
            }
            Key::Other => KeyOutcome::Ignored,
        }
    }
}
