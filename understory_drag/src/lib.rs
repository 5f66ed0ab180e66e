// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag --heading-base-level=0

//! Understory Drag: a draggable-element interaction engine.
//!
//! Given an element to move, and optionally a separate handle that starts the
//! drag, [`DragEngine`] tracks mouse and touch input, accumulates an offset
//! across successive drag sessions, and optionally clamps that offset so the
//! element never leaves the window.
//!
//! - [`input`]: one normalization function for mouse and touch payloads
//! - [`clamp`]: the offset clamper and viewport [`Limits`](clamp::Limits)
//! - [`host`]: the capabilities the engine drives ([`DragHost`], [`RendererHook`])
//! - [`listeners`]: scoped registration of start and document listeners
//! - [`style`]: cursor, will-change, and transform values for the renderer hook
//! - [`a11y`]: accessibility attributes reflecting drag state
//! - [`engine`]: the session state machine
//!
//! The crate renders nothing and owns no document. A host forwards events
//! from the listeners the engine asked for, and reads back the offset (or
//! lets a renderer hook apply it).
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_drag::{DragEngine, DragHost, DragOptions, InputEvent};
//!
//! #[derive(Default)]
//! struct Page { document_listening: bool }
//!
//! impl DragHost for Page {
//!     type Element = u32;
//!     fn listen_start(&mut self, _: u32) {}
//!     fn unlisten_start(&mut self, _: u32) {}
//!     fn listen_document(&mut self) { self.document_listening = true; }
//!     fn unlisten_document(&mut self) { self.document_listening = false; }
//!     fn bounding_rect(&self, _: u32) -> Rect { Rect::new(0.0, 0.0, 50.0, 50.0) }
//!     fn viewport_size(&self) -> Size { Size::new(800.0, 600.0) }
//! }
//!
//! let mut drag = DragEngine::headless(Page::default(), DragOptions::default());
//! drag.bind_target(7);
//! drag.attach().unwrap();
//!
//! // First session: (10, 10) → (40, 70).
//! drag.on_element_event(7, &InputEvent::mouse_down(Point::new(10.0, 10.0)));
//! assert!(drag.host().document_listening);
//! drag.on_document_event(&InputEvent::mouse_move(Point::new(40.0, 70.0)));
//! drag.on_document_event(&InputEvent::mouse_up(Point::new(40.0, 70.0)));
//! assert_eq!(drag.state().offset, Vec2::new(30.0, 60.0));
//!
//! // Second session, driven by touch, continues from the committed offset.
//! drag.on_element_event(7, &InputEvent::touch_start(Point::new(5.0, 5.0)));
//! drag.on_document_event(&InputEvent::touch_end(Point::new(15.0, 5.0)));
//! assert_eq!(drag.state().offset, Vec2::new(40.0, 60.0));
//! assert!(!drag.state().dragging);
//! ```
//!
//! ## Features
//!
//! - `std` (default): compile dependencies with the standard library.
//! - `libm`: `no_std` float support for `kurbo`.
//!
//! This crate is `no_std` compatible (with `alloc`).
//!
//! Diagnostics are emitted through `tracing`; install a subscriber in the
//! application to see session transitions and rejected input.

#![no_std]

extern crate alloc;

pub mod a11y;
pub mod clamp;
pub mod engine;
mod error;
pub mod host;
pub mod input;
pub mod listeners;
pub mod style;

pub use a11y::AccessibilityProps;
pub use engine::{DragEngine, DragOptions, DragSnapshot, DragUpdate, DragView};
pub use error::ConfigError;
pub use host::{DragHost, RendererHook};
pub use input::InputEvent;
