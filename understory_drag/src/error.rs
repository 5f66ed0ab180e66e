// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Misconfiguration detected when mounting a [`DragEngine`](crate::DragEngine).
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `attach` was called before a target element was bound.
    #[error("no target element bound; call `bind_target` before `attach`")]
    MissingTarget,
}
