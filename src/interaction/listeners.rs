// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Explicit subscribe / dispose bookkeeping for the event sources the demo consumes.
//!
//! Systems reading window or pointer events are gated with [`listening`], so
//! disposing a handle detaches the corresponding behavior on the next frame.

use bevy::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    Resize,
    PointerMove,
    PointerDrag,
    Keyboard,
}

/// Disposer returned by [`ListenerRegistry::subscribe`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a handle leaves the listener subscribed forever"]
pub struct ListenerHandle {
    id: u64,
    listener: Listener,
}

impl ListenerHandle {
    pub fn listener(&self) -> Listener {
        self.listener
    }

    /// Unsubscribe. Returns false if the registry no longer knew this handle.
    pub fn dispose(self, registry: &mut ListenerRegistry) -> bool {
        registry.unsubscribe(self)
    }
}

#[derive(Resource, Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    active: HashMap<u64, Listener>,
}

impl ListenerRegistry {
    pub fn subscribe(&mut self, listener: Listener) -> ListenerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.active.insert(id, listener);
        debug!(?listener, id, "listener subscribed");
        ListenerHandle { id, listener }
    }

    pub fn unsubscribe(&mut self, handle: ListenerHandle) -> bool {
        let removed = self.active.remove(&handle.id).is_some();
        if removed {
            debug!(listener = ?handle.listener, id = handle.id, "listener disposed");
        }
        removed
    }

    pub fn is_subscribed(&self, listener: Listener) -> bool {
        self.active.values().any(|l| *l == listener)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

/// Handles bound by the app's plugins; drained on teardown.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct BoundListeners(pub Vec<ListenerHandle>);

impl BoundListeners {
    /// Dispose every bound handle. Returns how many were still live.
    pub fn dispose_all(&mut self, registry: &mut ListenerRegistry) -> usize {
        self.0
            .drain(..)
            .map(|h| h.dispose(registry))
            .filter(|live| *live)
            .count()
    }
}

/// Subscribe `listener` at plugin build time and keep its disposer in [`BoundListeners`].
pub fn bind_listener(app: &mut App, listener: Listener) {
    let handle = app
        .world_mut()
        .get_resource_or_insert_with(ListenerRegistry::default)
        .subscribe(listener);
    app.world_mut()
        .get_resource_or_insert_with(BoundListeners::default)
        .push(handle);
}

/// Run condition: true while at least one `listener` subscription is live.
pub fn listening(listener: Listener) -> impl Fn(Option<Res<ListenerRegistry>>) -> bool + Clone {
    move |registry: Option<Res<ListenerRegistry>>| {
        registry.is_some_and(|r| r.is_subscribed(listener))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispose_detaches_only_that_subscription() {
        let mut reg = ListenerRegistry::default();
        let a = reg.subscribe(Listener::PointerMove);
        let b = reg.subscribe(Listener::PointerMove);
        let r = reg.subscribe(Listener::Resize);
        assert_eq!(reg.active_count(), 3);

        assert!(a.dispose(&mut reg));
        assert!(reg.is_subscribed(Listener::PointerMove));
        assert!(b.dispose(&mut reg));
        assert!(!reg.is_subscribed(Listener::PointerMove));
        assert!(reg.is_subscribed(Listener::Resize));
        assert_eq!(r.listener(), Listener::Resize);
    }

    #[test]
    fn dispose_all_empties_bound_list() {
        let mut reg = ListenerRegistry::default();
        let mut bound = BoundListeners::default();
        bound.push(reg.subscribe(Listener::Resize));
        bound.push(reg.subscribe(Listener::Keyboard));
        assert_eq!(bound.dispose_all(&mut reg), 2);
        assert!(bound.is_empty());
        assert_eq!(reg.active_count(), 0);
    }

    #[test]
    fn gated_system_stops_after_dispose() {
        #[derive(Resource, Default)]
        struct Hits(u32);

        let mut app = App::new();
        app.init_resource::<Hits>();
        bind_listener(&mut app, Listener::PointerMove);
        app.add_systems(
            Update,
            (|mut hits: ResMut<Hits>| hits.0 += 1).run_if(listening(Listener::PointerMove)),
        );
        app.update();
        assert_eq!(app.world().resource::<Hits>().0, 1);

        app.world_mut()
            .resource_scope(|world, mut bound: Mut<BoundListeners>| {
                let mut reg = world.resource_mut::<ListenerRegistry>();
                bound.dispose_all(&mut reg);
            });
        app.update();
        assert_eq!(app.world().resource::<Hits>().0, 1);
    }
}
