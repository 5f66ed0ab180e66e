// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag engine: session state machine and offset accumulation.
//!
//! ## Usage
//!
//! 1) Create a [`DragEngine`] with a [`DragHost`], an optional renderer hook
//!    (`()` for none), and [`DragOptions`].
//! 2) Bind the element being moved with [`DragEngine::bind_target`], and
//!    optionally a separate handle with [`DragEngine::bind_handle`].
//! 3) Mount with [`DragEngine::attach`]; the host is asked to listen for
//!    start events on the handle (or the target).
//! 4) Forward start events with [`DragEngine::on_element_event`] and
//!    document-level move/end events with [`DragEngine::on_document_event`].
//! 5) Read [`DragEngine::state`] to position the element, unless
//!    `control_style` lets the renderer hook do it.
//!
//! ## Session state machine
//!
//! ```text
//!            start (primary press / first touch) on handle
//!   ┌──────┐ ───────────────────────────────────────────▶ ┌──────────┐
//!   │ IDLE │                                               │ DRAGGING │ ◀─┐ move
//!   └──────┘ ◀─────────────────────────────────────────── └──────────┘ ──┘
//!            end (release / touch end): commit baseline
//! ```
//!
//! While dragging, every move computes `(pointer - origin) + baseline`,
//! clamps it to the session's [`Limits`], and publishes it as the current
//! offset. The end event does the same and then commits the result as the
//! baseline for the next session.

use core::fmt;

use kurbo::{Point, Vec2};

use crate::a11y::AccessibilityProps;
use crate::clamp::{Limits, clamp_offset};
use crate::error::ConfigError;
use crate::host::{DragHost, RendererHook};
use crate::input::{InputEvent, Phase, pointer_position};
use crate::listeners::{DocumentListeners, StartListener};
use crate::style::{Cursor, WillChange};

/// Engine configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DragOptions {
    /// Apply transform, cursor, and will-change through the renderer hook.
    ///
    /// When off, the renderer hook is never called and the consumer positions
    /// the element from [`DragEngine::state`].
    pub control_style: bool,
    /// Clamp the offset so the target's bounding box stays inside the window.
    pub viewport: bool,
}

impl DragOptions {
    /// Sets [`control_style`](Self::control_style).
    #[must_use]
    pub const fn with_control_style(mut self, control_style: bool) -> Self {
        self.control_style = control_style;
        self
    }

    /// Sets [`viewport`](Self::viewport).
    #[must_use]
    pub const fn with_viewport(mut self, viewport: bool) -> Self {
        self.viewport = viewport;
        self
    }
}

/// Read-only snapshot of the engine's state.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragSnapshot {
    /// `true` while a session is active.
    pub dragging: bool,
    /// Current offset; equals the committed baseline while idle.
    pub offset: Vec2,
}

/// Result of an input event that changed the engine's state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragUpdate {
    /// A session began at `origin`.
    Started {
        /// Pointer position at the start event.
        origin: Point,
    },
    /// The current offset was recomputed.
    Moved {
        /// Newly published offset.
        offset: Vec2,
    },
    /// The session ended and `offset` was committed as the baseline.
    Ended {
        /// Committed offset.
        offset: Vec2,
    },
}

/// Everything a render function needs, bundled together.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragView<E> {
    /// Bound target, if any.
    pub target: Option<E>,
    /// Bound handle, if any.
    pub handle: Option<E>,
    /// Dragging flag and offset.
    pub state: DragSnapshot,
    /// Accessibility attributes for the target.
    pub props: AccessibilityProps,
}

#[derive(Copy, Clone, Debug)]
struct Session {
    origin: Point,
    limits: Option<Limits>,
}

/// Draggable-element engine.
///
/// See the [module documentation](self) for the session model.
pub struct DragEngine<H: DragHost, R: RendererHook<H::Element> = ()> {
    host: H,
    renderer: R,
    options: DragOptions,
    target: Option<H::Element>,
    handle: Option<H::Element>,
    attached: bool,
    session: Option<Session>,
    baseline: Vec2,
    offset: Vec2,
    start_listener: StartListener<H::Element>,
    document: DocumentListeners,
}

impl<H: DragHost> DragEngine<H> {
    /// Creates an engine without a renderer hook.
    #[must_use]
    pub fn headless(host: H, options: DragOptions) -> Self {
        Self::new(host, (), options)
    }
}

impl<H: DragHost, R: RendererHook<H::Element>> DragEngine<H, R> {
    /// Creates an idle, detached engine with a zero baseline.
    #[must_use]
    pub fn new(host: H, renderer: R, options: DragOptions) -> Self {
        Self {
            host,
            renderer,
            options,
            target: None,
            handle: None,
            attached: false,
            session: None,
            baseline: Vec2::ZERO,
            offset: Vec2::ZERO,
            start_listener: StartListener::default(),
            document: DocumentListeners::default(),
        }
    }

    /// Returns the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the renderer hook.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the renderer hook mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> DragOptions {
        self.options
    }

    /// Replaces the options.
    ///
    /// An active session is finished first, committing its current offset
    /// and releasing its listeners. If attached, presentation is then brought
    /// in line with the new `control_style`.
    pub fn configure(&mut self, options: DragOptions) {
        if self.finish_session() {
            tracing::debug!("drag session finished by reconfiguration");
        }
        let previous = core::mem::replace(&mut self.options, options);
        if previous != options {
            tracing::debug!(?previous, ?options, "drag engine reconfigured");
        }
        if !self.attached {
            return;
        }
        match (previous.control_style, options.control_style) {
            (true, false) => {
                if let Some(start) = self.start_listener.element() {
                    self.renderer.set_cursor(start, None);
                }
            }
            (_, true) => {
                self.sync_cursor();
                self.sync_transform();
            }
            (false, false) => {}
        }
    }

    /// Binds the element being moved.
    ///
    /// Changing the target finishes an active session. With `control_style`
    /// on, the previous target's transform is reset to zero and the offset is
    /// written to the new one.
    pub fn bind_target(&mut self, target: H::Element) {
        if self.target == Some(target) {
            return;
        }
        self.finish_session();
        if self.attached
            && self.options.control_style
            && let Some(old) = self.target
        {
            self.renderer.set_transform(old, Vec2::ZERO);
        }
        self.target = Some(target);
        self.rebind_start();
        self.sync_transform();
    }

    /// Binds (or with `None`, unbinds) a separate element that starts drags.
    ///
    /// Changing the handle finishes an active session.
    pub fn bind_handle(&mut self, handle: Option<H::Element>) {
        if self.handle == handle {
            return;
        }
        self.finish_session();
        self.handle = handle;
        self.rebind_start();
    }

    /// Bound target, if any.
    #[must_use]
    pub fn target(&self) -> Option<H::Element> {
        self.target
    }

    /// Bound handle, if any.
    #[must_use]
    pub fn handle(&self) -> Option<H::Element> {
        self.handle
    }

    /// Element that listens for start events: the handle, or else the target.
    #[must_use]
    pub fn start_element(&self) -> Option<H::Element> {
        self.handle.or(self.target)
    }

    /// Mounts the engine, registering the start listener.
    ///
    /// Attaching an attached engine does nothing.
    pub fn attach(&mut self) -> Result<(), ConfigError> {
        if self.attached {
            return Ok(());
        }
        let (Some(target), Some(start)) = (self.target, self.start_element()) else {
            return Err(ConfigError::MissingTarget);
        };
        self.attached = true;
        self.start_listener.acquire(&mut self.host, start);
        self.sync_cursor();
        self.sync_transform();
        tracing::debug!(?target, ?start, "drag engine attached");
        Ok(())
    }

    /// Unmounts the engine.
    ///
    /// An active session is finished and every listener is released.
    /// Called automatically on drop.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        if self.finish_session() {
            tracing::debug!("drag session finished by detach");
        }
        if let Some(start) = self.start_listener.element() {
            if self.options.control_style {
                self.renderer.set_cursor(start, None);
            }
        }
        self.start_listener.release(&mut self.host);
        self.attached = false;
        tracing::debug!("drag engine detached");
    }

    /// Returns `true` between [`attach`](Self::attach) and [`detach`](Self::detach).
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Handles an event delivered by the start listener on `element`.
    ///
    /// Only a primary-button press or touch start on the current start
    /// element opens a session, and only while idle.
    pub fn on_element_event(
        &mut self,
        element: H::Element,
        event: &InputEvent,
    ) -> Option<DragUpdate> {
        if self.start_listener.element() != Some(element) || self.session.is_some() {
            return None;
        }
        if !event.can_start() {
            return None;
        }
        self.start(event)
    }

    /// Handles an event delivered by the document-level listeners.
    ///
    /// Ignored unless a session holds those listeners.
    pub fn on_document_event(&mut self, event: &InputEvent) -> Option<DragUpdate> {
        if !self.document.is_held() {
            return None;
        }
        match event.phase() {
            Phase::Start => None,
            Phase::Move => self.drag_move(event),
            Phase::End => self.drag_end(event),
        }
    }

    /// Dragging flag and current offset.
    #[must_use]
    pub fn state(&self) -> DragSnapshot {
        DragSnapshot {
            dragging: self.is_dragging(),
            offset: self.offset,
        }
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Current offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Offset committed by the last completed session.
    #[must_use]
    pub fn baseline(&self) -> Vec2 {
        self.baseline
    }

    /// Limits in force for the active session, if viewport clamping applies.
    #[must_use]
    pub fn limits(&self) -> Option<Limits> {
        self.session.and_then(|s| s.limits)
    }

    /// Accessibility attributes for the target.
    #[must_use]
    pub fn accessibility_props(&self) -> AccessibilityProps {
        AccessibilityProps::for_dragging(self.is_dragging())
    }

    /// Bindings, state, and props in one value.
    #[must_use]
    pub fn view(&self) -> DragView<H::Element> {
        DragView {
            target: self.target,
            handle: self.handle,
            state: self.state(),
            props: self.accessibility_props(),
        }
    }

    /// Passes [`view`](Self::view) to a render function.
    pub fn render<T>(&self, f: impl FnOnce(DragView<H::Element>) -> T) -> T {
        f(self.view())
    }

    fn start(&mut self, event: &InputEvent) -> Option<DragUpdate> {
        let target = self.target?;
        let Some(origin) = pointer_position(event) else {
            tracing::warn!(?event, "ignoring drag start without usable coordinates");
            return None;
        };
        let limits = self.options.viewport.then(|| {
            Limits::for_viewport(
                self.host.bounding_rect(target),
                self.host.viewport_size(),
                self.baseline,
            )
        });
        self.session = Some(Session { origin, limits });
        self.document.acquire(&mut self.host);
        if self.options.control_style {
            self.renderer
                .set_will_change(target, Some(WillChange::Transform));
        }
        self.sync_cursor();
        tracing::debug!(?origin, ?limits, baseline = ?self.baseline, "drag started");
        Some(DragUpdate::Started { origin })
    }

    fn drag_move(&mut self, event: &InputEvent) -> Option<DragUpdate> {
        let session = self.session?;
        let Some(at) = pointer_position(event) else {
            tracing::warn!(?event, "ignoring drag move without usable coordinates");
            return None;
        };
        let offset = self.reposition(session, at);
        tracing::trace!(?at, ?offset, "drag moved");
        Some(DragUpdate::Moved { offset })
    }

    fn drag_end(&mut self, event: &InputEvent) -> Option<DragUpdate> {
        let session = self.session?;
        match pointer_position(event) {
            Some(at) => {
                self.reposition(session, at);
            }
            None => {
                tracing::warn!(?event, "drag end without usable coordinates; keeping last offset");
            }
        }
        self.finish_session();
        tracing::debug!(offset = ?self.offset, "drag ended");
        Some(DragUpdate::Ended {
            offset: self.offset,
        })
    }

    /// Computes, clamps, and publishes the offset for a pointer at `at`.
    fn reposition(&mut self, session: Session, at: Point) -> Vec2 {
        let candidate = (at - session.origin) + self.baseline;
        let offset = clamp_offset(candidate, session.limits.as_ref());
        if offset != self.offset {
            self.offset = offset;
            self.sync_transform();
        }
        offset
    }

    /// Ends the active session, if any, committing the current offset.
    ///
    /// Releases the document listeners and clears the will-change hint.
    /// Returns `true` if a session was active.
    fn finish_session(&mut self) -> bool {
        if self.session.take().is_none() {
            return false;
        }
        self.baseline = self.offset;
        self.document.release(&mut self.host);
        if self.options.control_style {
            if let Some(target) = self.target {
                self.renderer.set_will_change(target, None);
            }
        }
        self.sync_cursor();
        true
    }

    /// Moves the start listener to the current start element, if attached.
    fn rebind_start(&mut self) {
        if !self.attached {
            return;
        }
        let Some(next) = self.start_element() else {
            return;
        };
        let previous = self.start_listener.element();
        if previous == Some(next) {
            return;
        }
        if self.options.control_style {
            if let Some(previous) = previous {
                self.renderer.set_cursor(previous, None);
            }
        }
        self.start_listener.acquire(&mut self.host, next);
        self.sync_cursor();
        tracing::debug!(?previous, ?next, "drag start listener moved");
    }

    fn sync_cursor(&mut self) {
        if !(self.attached && self.options.control_style) {
            return;
        }
        if let Some(start) = self.start_listener.element() {
            let cursor = Cursor::for_dragging(self.is_dragging());
            self.renderer.set_cursor(start, Some(cursor));
        }
    }

    fn sync_transform(&mut self) {
        if !(self.attached && self.options.control_style) {
            return;
        }
        if let Some(target) = self.target {
            self.renderer.set_transform(target, self.offset);
        }
    }
}

impl<H: DragHost, R: RendererHook<H::Element>> Drop for DragEngine<H, R> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<H: DragHost, R: RendererHook<H::Element>> fmt::Debug for DragEngine<H, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragEngine")
            .field("options", &self.options)
            .field("target", &self.target)
            .field("handle", &self.handle)
            .field("attached", &self.attached)
            .field("session", &self.session)
            .field("baseline", &self.baseline)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}
