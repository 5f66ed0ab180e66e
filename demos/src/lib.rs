// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated page for driving `understory_drag` without a real document.
//!
//! [`SimPage`] keeps element rectangles and listener registrations, and
//! [`CssStyles`] records the inline styles a browser host would write. The
//! [`press`] and [`document`] helpers deliver events only through listeners
//! the engine actually holds, the way a document would.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use kurbo::{Rect, Size, Vec2};
use tracing_subscriber::EnvFilter;
use understory_drag::style::{Cursor, Translate, WillChange};
use understory_drag::{DragEngine, DragHost, DragUpdate, InputEvent, RendererHook};

/// Element identifier on the simulated page.
pub type ElementId = u32;

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default: `debug`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Page layout plus listener bookkeeping.
#[derive(Debug)]
pub struct SimPage {
    layout: BTreeMap<ElementId, Rect>,
    translation: BTreeMap<ElementId, Vec2>,
    viewport: Size,
    start_listeners: Vec<ElementId>,
    document_listening: bool,
}

impl SimPage {
    /// Empty page with a window of `viewport` size.
    pub fn new(viewport: Size) -> Self {
        Self {
            layout: BTreeMap::new(),
            translation: BTreeMap::new(),
            viewport,
            start_listeners: Vec::new(),
            document_listening: false,
        }
    }

    /// Places `id` at `rect` (untranslated).
    pub fn insert(&mut self, id: ElementId, rect: Rect) {
        self.layout.insert(id, rect);
    }

    /// Moves `id` on screen by `offset`, as an applied transform would.
    pub fn translate(&mut self, id: ElementId, offset: Vec2) {
        self.translation.insert(id, offset);
    }

    /// Resizes the window.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Returns `true` if start events on `id` are forwarded.
    pub fn listens_on(&self, id: ElementId) -> bool {
        self.start_listeners.contains(&id)
    }

    /// Returns `true` if document move/end events are forwarded.
    pub fn document_listening(&self) -> bool {
        self.document_listening
    }
}

impl DragHost for SimPage {
    type Element = ElementId;

    fn listen_start(&mut self, element: ElementId) {
        self.start_listeners.push(element);
    }

    fn unlisten_start(&mut self, element: ElementId) {
        self.start_listeners.retain(|e| *e != element);
    }

    fn listen_document(&mut self) {
        self.document_listening = true;
    }

    fn unlisten_document(&mut self) {
        self.document_listening = false;
    }

    fn bounding_rect(&self, element: ElementId) -> Rect {
        let rect = self.layout.get(&element).copied().unwrap_or(Rect::ZERO);
        rect + self.translation.get(&element).copied().unwrap_or(Vec2::ZERO)
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

/// Inline styles, keyed by element and property name.
#[derive(Debug, Default)]
pub struct CssStyles {
    styles: BTreeMap<(ElementId, &'static str), String>,
}

impl CssStyles {
    /// Value of `property` on `element`, if set.
    pub fn get(&self, element: ElementId, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|((e, p), _)| *e == element && *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// The `style` attribute a browser would show for `element`.
    pub fn attribute(&self, element: ElementId) -> String {
        let mut out = String::new();
        let entries = self
            .styles
            .range((element, "")..)
            .take_while(|((e, _), _)| *e == element);
        for ((_, property), value) in entries {
            let _ = write!(out, "{property}: {value}; ");
        }
        out.trim_end().to_owned()
    }

    fn set(&mut self, element: ElementId, property: &'static str, value: Option<&str>) {
        match value {
            Some(value) => {
                self.styles.insert((element, property), value.to_owned());
            }
            None => {
                self.styles.remove(&(element, property));
            }
        }
    }
}

impl RendererHook<ElementId> for CssStyles {
    fn set_will_change(&mut self, element: ElementId, hint: Option<WillChange>) {
        self.set(element, "will-change", hint.map(WillChange::as_css));
    }

    fn set_cursor(&mut self, element: ElementId, cursor: Option<Cursor>) {
        self.set(element, "cursor", cursor.map(Cursor::as_css));
    }

    fn set_transform(&mut self, element: ElementId, offset: Vec2) {
        self.set(element, "transform", Some(Translate(offset).to_css().as_str()));
    }
}

/// Delivers a start event on `element`, if the engine listens there.
pub fn press<R>(
    engine: &mut DragEngine<SimPage, R>,
    element: ElementId,
    event: InputEvent,
) -> Option<DragUpdate>
where
    R: RendererHook<ElementId>,
{
    if !engine.host().listens_on(element) {
        return None;
    }
    engine.on_element_event(element, &event)
}

/// Delivers a document-level event, if the engine holds document listeners.
pub fn document<R>(engine: &mut DragEngine<SimPage, R>, event: InputEvent) -> Option<DragUpdate>
where
    R: RendererHook<ElementId>,
{
    if !engine.host().document_listening() {
        return None;
    }
    engine.on_document_event(&event)
}
