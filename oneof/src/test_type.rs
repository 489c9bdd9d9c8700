//! Instrumented alternatives for unit tests.

use std::cell::Cell;
use std::rc::Rc;

/// Lifecycle event counts shared between a test and its [`Tracked`] values.
#[derive(Default)]
pub(crate) struct Counters {
    drops: Cell<usize>,
    clones: Cell<usize>,
    clone_froms: Cell<usize>,
}

impl Counters {
    pub(crate) fn new() -> Rc<Counters> {
        Rc::new(Counters::default())
    }

    pub(crate) fn drops(&self) -> usize {
        self.drops.get()
    }

    pub(crate) fn clones(&self) -> usize {
        self.clones.get()
    }

    pub(crate) fn clone_froms(&self) -> usize {
        self.clone_froms.get()
    }
}

fn bump(c: &Cell<usize>) {
    c.set(c.get() + 1);
}

/// Counts its drops, clones and `clone_from`s.
pub(crate) struct Tracked {
    pub(crate) value: i32,
    counters: Rc<Counters>,
}

impl Tracked {
    pub(crate) fn new(value: i32, counters: &Rc<Counters>) -> Tracked {
        Tracked {
            value,
            counters: counters.clone(),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        bump(&self.counters.clones);
        Tracked::new(self.value, &self.counters)
    }

    fn clone_from(&mut self, source: &Self) {
        bump(&source.counters.clone_froms);
        self.value = source.value;
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        bump(&self.counters.drops);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl core::fmt::Debug for Tracked {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

/// Panics whenever it is cloned.
#[derive(Debug, PartialEq)]
pub(crate) struct PanicOnClone(pub(crate) u8);

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        panic!("PanicOnClone::clone")
    }
}

/// Counts its drop, then panics.
pub(crate) struct PanicOnDrop(pub(crate) Rc<Cell<usize>>);

impl Drop for PanicOnDrop {
    fn drop(&mut self) {
        bump(&self.0);
        panic!("PanicOnDrop::drop")
    }
}
