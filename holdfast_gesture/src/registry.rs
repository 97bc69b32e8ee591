// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit element → behavior bookkeeping.
//!
//! Behaviors are not injected onto host elements as hidden properties; a
//! [`Registry`] owns them, keyed by element identity. Attaching over an
//! existing entry tears the old instance down first, so re-configuration is
//! idempotent and forwarded events are only ever seen by the stored
//! instance. Detaching something that was never attached is a no-op.

use hashbrown::HashMap;

use crate::host::Host;

/// Teardown seam between the registry and a behavior instance.
pub trait Behavior<H: Host> {
    /// Returns `true` while the behavior has an open gesture session.
    fn is_active(&self) -> bool;

    /// Cancels any open session and removes transient host state (styling
    /// classes, in-progress overlays). Must be safe to call when idle.
    fn deactivate(&mut self, host: &mut H);
}

/// A process-wide mapping from element identity to behavior instance.
///
/// One registry per behavior kind: an element can carry at most one grab,
/// one size, and one select behavior at a time.
#[derive(Debug, Clone)]
pub struct Registry<K, B> {
    entries: HashMap<K, B>,
}

impl<K, B> Default for Registry<K, B> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K, B> Registry<K, B>
where
    K: Eq + core::hash::Hash,
{
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of attached behaviors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if a behavior is attached under `key`.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Borrows the behavior attached under `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&B> {
        self.entries.get(key)
    }

    /// Mutably borrows the behavior attached under `key`.
    ///
    /// This is how hosts route pointer events: look the instance up, then
    /// call its `on_press` / `on_document_move` / `on_document_release`.
    #[must_use]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut B> {
        self.entries.get_mut(key)
    }

    /// Attaches `behavior` under `key`, tearing down any prior instance.
    pub fn attach<H>(&mut self, host: &mut H, key: K, behavior: B)
    where
        H: Host,
        B: Behavior<H>,
    {
        if let Some(mut replaced) = self.entries.insert(key, behavior) {
            replaced.deactivate(host);
        }
    }

    /// Detaches and tears down the behavior under `key`.
    ///
    /// Returns `false` (and does nothing) when no behavior is attached.
    pub fn detach<H>(&mut self, host: &mut H, key: &K) -> bool
    where
        H: Host,
        B: Behavior<H>,
    {
        match self.entries.remove(key) {
            Some(mut behavior) => {
                behavior.deactivate(host);
                true
            }
            None => false,
        }
    }

    /// Detaches and tears down every attached behavior.
    pub fn detach_all<H>(&mut self, host: &mut H)
    where
        H: Host,
        B: Behavior<H>,
    {
        for (_, mut behavior) in self.entries.drain() {
            behavior.deactivate(host);
        }
    }
}
