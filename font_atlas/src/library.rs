// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Process-wide rasterizer state.
//!
//! Each [`Rasterizer`] backend has one [`Context`](Rasterizer::Context), created the first
//! time it is needed and kept until [`shutdown`] is called for that backend. Every access goes
//! through one mutex, so bakes from different threads run one after the other.
//!
//! A panic while the mutex is held doesn't take the library down: the next caller clears the
//! poison and keeps the existing contexts.

use core::any::{Any, TypeId};
use std::sync::{Mutex, MutexGuard};

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

use crate::error::BakeError;
use crate::rasterizer::Rasterizer;

type ContextMap = HashMap<TypeId, Box<dyn Any + Send>>;

static LIBRARY: Mutex<Option<ContextMap>> = Mutex::new(None);

fn lock_library() -> MutexGuard<'static, Option<ContextMap>> {
    LIBRARY.lock().unwrap_or_else(|poisoned| {
        log::error!("rasterizer library lock was poisoned by a panic, recovering");
        LIBRARY.clear_poison();
        poisoned.into_inner()
    })
}

/// Runs `f` with the context of backend `R`, creating the context on first use.
///
/// The library lock is held for the duration of `f`. Calling back into this module from
/// `f` deadlocks.
///
/// Returns [`BakeError::InitFailed`] if the context can't be created.
pub fn with_context<R, O>(
    f: impl FnOnce(&mut R::Context) -> Result<O, BakeError>,
) -> Result<O, BakeError>
where
    R: Rasterizer + 'static,
{
    let mut library = lock_library();
    let contexts = library.get_or_insert_with(HashMap::new);
    let context = match contexts.entry(TypeId::of::<R>()) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => {
            let Some(context) = R::create_context() else {
                log::warn!("{} rasterizer failed to initialize", R::NAME);
                return Err(BakeError::InitFailed);
            };
            log::debug!("initialized {} rasterizer", R::NAME);
            entry.insert(Box::new(context))
        }
    };
    let context = (**context)
        .downcast_mut::<R::Context>()
        .ok_or(BakeError::InitFailed)?;
    f(context)
}

/// Drops the context of backend `R`.
///
/// Returns `true` if there was one. The next [`with_context`] call creates a fresh context.
pub fn shutdown<R: Rasterizer + 'static>() -> bool {
    let mut library = lock_library();
    let Some(contexts) = library.as_mut() else {
        return false;
    };
    let removed = contexts.remove(&TypeId::of::<R>()).is_some();
    if contexts.is_empty() {
        *library = None;
    }
    if removed {
        log::debug!("shut down {} rasterizer", R::NAME);
    }
    removed
}

/// Returns `true` if backend `R` currently has a context.
pub fn is_initialized<R: Rasterizer + 'static>() -> bool {
    lock_library()
        .as_ref()
        .is_some_and(|contexts| contexts.contains_key(&TypeId::of::<R>()))
}
