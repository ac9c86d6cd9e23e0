//! Test fixtures for simple-vector development.
//!
//! Element types that make the container's element lifecycle observable:
//! [`Tracked`] counts drops, [`Counted`] counts clones (to tell a move
//! from a copy), [`Fragile`] panics on clone, and [`Explosive`] panics in
//! `Default` while a [`DefaultTrap`] is armed (to check strong safety).
//! All of them implement `Default` with an inert placeholder value, since
//! the container fills unused slots with `T::default()`.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::rc::Rc;

/// Shared counter handed to fixture elements.
///
/// Cloning a ledger shares the same count.
#[derive(Clone, Debug, Default)]
pub struct Ledger(Rc<Cell<usize>>);

impl Ledger {
    /// Create a ledger starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count.
    pub fn count(&self) -> usize {
        self.0.get()
    }

    fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// An element that records its own drop in a [`Ledger`].
///
/// Placeholders built by `Default` carry no ledger and are not counted,
/// so the ledger reflects only values the test created.
#[derive(Clone, Debug, Default)]
pub struct Tracked {
    pub value: i32,
    ledger: Option<Ledger>,
}

impl Tracked {
    /// A value whose drop is recorded in `ledger`.
    pub fn new(value: i32, ledger: &Ledger) -> Self {
        Self {
            value,
            ledger: Some(ledger.clone()),
        }
    }

    /// Whether this is a default-built placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.ledger.is_none()
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(ledger) = &self.ledger {
            ledger.bump();
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// An element that records every clone made of it in a [`Ledger`].
#[derive(Debug, Default)]
pub struct Counted {
    pub value: i32,
    clones: Option<Ledger>,
}

impl Counted {
    /// A value whose clones are recorded in `clones`.
    pub fn new(value: i32, clones: &Ledger) -> Self {
        Self {
            value,
            clones: Some(clones.clone()),
        }
    }
}

impl Clone for Counted {
    fn clone(&self) -> Self {
        if let Some(clones) = &self.clones {
            clones.bump();
        }
        Self {
            value: self.value,
            clones: self.clones.clone(),
        }
    }
}

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// An element whose clone panics when it is poisoned.
#[derive(Debug, Default, PartialEq)]
pub struct Fragile {
    pub value: i32,
    pub poisoned: bool,
}

impl Fragile {
    /// A value that clones normally.
    pub fn new(value: i32) -> Self {
        Self {
            value,
            poisoned: false,
        }
    }

    /// A value whose clone panics.
    pub fn poisoned(value: i32) -> Self {
        Self {
            value,
            poisoned: true,
        }
    }
}

impl Clone for Fragile {
    fn clone(&self) -> Self {
        if self.poisoned {
            panic!("Fragile({}) refused to clone", self.value);
        }
        Self::new(self.value)
    }
}

thread_local! {
    static DEFAULT_ARMED: Cell<bool> = const { Cell::new(false) };
}

/// An element whose `Default` panics while a [`DefaultTrap`] is held on the
/// current thread. Values built with [`Explosive::new`] are unaffected.
#[derive(Clone, Debug, PartialEq)]
pub struct Explosive {
    pub value: i32,
}

impl Explosive {
    /// A value built without going through `Default`.
    pub fn new(value: i32) -> Self {
        Self { value }
    }
}

impl Default for Explosive {
    fn default() -> Self {
        if DEFAULT_ARMED.with(Cell::get) {
            panic!("Explosive::default called while armed");
        }
        Self { value: 0 }
    }
}

/// Arms [`Explosive::default`] on the current thread until dropped.
pub struct DefaultTrap(());

impl DefaultTrap {
    /// Arm the trap.
    pub fn arm() -> Self {
        DEFAULT_ARMED.with(|armed| armed.set(true));
        Self(())
    }
}

impl Drop for DefaultTrap {
    fn drop(&mut self) {
        DEFAULT_ARMED.with(|armed| armed.set(false));
    }
}

/// Run `f`, returning `true` if it panicked.
///
/// Wraps `catch_unwind` with `AssertUnwindSafe`: the fixtures hold `Rc`
/// ledgers, and the tests inspect the state afterwards on purpose.
pub fn panics<F: FnOnce()>(f: F) -> bool {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)).is_err()
}
