// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped listener registrations.
//!
//! Each registration records what it holds, so acquiring twice registers
//! once and releasing twice unregisters once. The engine releases both
//! scopes on every exit path: session end, reconfiguration, detach, and drop.

use crate::host::DragHost;

/// The start (mouse-down / touch-start) listener on the handle or target.
#[derive(Debug)]
pub struct StartListener<E> {
    element: Option<E>,
}

impl<E> Default for StartListener<E> {
    fn default() -> Self {
        Self { element: None }
    }
}

impl<E: Copy + Eq> StartListener<E> {
    /// Element currently listened on, if any.
    #[must_use]
    pub fn element(&self) -> Option<E> {
        self.element
    }

    /// Listens on `element`, moving the registration if it was elsewhere.
    ///
    /// Returns `true` if the host was asked to register.
    pub fn acquire<H>(&mut self, host: &mut H, element: E) -> bool
    where
        H: DragHost<Element = E>,
    {
        if self.element == Some(element) {
            return false;
        }
        self.release(host);
        host.listen_start(element);
        self.element = Some(element);
        true
    }

    /// Drops the registration, if held.
    ///
    /// Returns `true` if the host was asked to unregister.
    pub fn release<H>(&mut self, host: &mut H) -> bool
    where
        H: DragHost<Element = E>,
    {
        match self.element.take() {
            Some(element) => {
                host.unlisten_start(element);
                true
            }
            None => false,
        }
    }
}

/// The document-level move/end listeners held for the duration of a session.
#[derive(Debug, Default)]
pub struct DocumentListeners {
    held: bool,
}

impl DocumentListeners {
    /// Returns `true` while the registration is held.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Registers the listeners unless already held.
    pub fn acquire<H: DragHost>(&mut self, host: &mut H) -> bool {
        if self.held {
            return false;
        }
        host.listen_document();
        self.held = true;
        true
    }

    /// Unregisters the listeners if held.
    pub fn release<H: DragHost>(&mut self, host: &mut H) -> bool {
        if !self.held {
            return false;
        }
        host.unlisten_document();
        self.held = false;
        true
    }
}
