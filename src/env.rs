//! Persistent environments shared by the type checker and the interpreter.
//!
//! An environment is an immutable linked list of bindings. Extending it
//! returns a new environment that shares the old one, so a child scope's
//! bindings are never visible to its parent or siblings. Lookup returns the
//! most recently added binding with the given name.
//!
//! A binding can also be *reserved*: the slot exists (and shadows older
//! bindings) before its value does. Closures built while the slot is empty
//! capture it, and see the value once [`Env::fill`] has run. This is how
//! self-referential definitions are bound.

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

struct Frame<T> {
    name: String,
    slot: OnceCell<T>,
    parent: Option<Rc<Frame<T>>>,
}

pub struct Env<T> {
    head: Option<Rc<Frame<T>>>,
}

/// Result of looking a name up in an [`Env`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a, T> {
    Bound(&'a T),
    /// The name is reserved but its value has not been filled in yet
    Reserved,
    Unbound,
}

impl<T> Env<T> {
    pub fn empty() -> Self {
        Env { head: None }
    }

    pub fn with_bindings(bindings: impl IntoIterator<Item = (String, T)>) -> Self {
        bindings
            .into_iter()
            .fold(Env::empty(), |env, (name, value)| env.extend(name, value))
    }

    fn push(&self, name: String, slot: OnceCell<T>) -> Self {
        Env {
            head: Some(Rc::new(Frame {
                name,
                slot,
                parent: self.head.clone(),
            })),
        }
    }

    pub fn extend(&self, name: impl Into<String>, value: T) -> Self {
        self.push(name.into(), OnceCell::from(value))
    }

    /// Extend with an empty slot for `name`, to be filled with [`Env::fill`].
    pub fn reserve(&self, name: impl Into<String>) -> Self {
        self.push(name.into(), OnceCell::new())
    }

    /// Fill the newest slot. Gives the value back if that slot is already
    /// filled or the environment is empty.
    pub fn fill(&self, value: T) -> Result<(), T> {
        match &self.head {
            Some(frame) => frame.slot.set(value),
            None => Err(value),
        }
    }

    pub fn lookup(&self, name: &str) -> Lookup<'_, T> {
        let mut current = self.head.as_deref();
        while let Some(frame) = current {
            if frame.name == name {
                return match frame.slot.get() {
                    Some(value) => Lookup::Bound(value),
                    None => Lookup::Reserved,
                };
            }
            current = frame.parent.as_deref();
        }
        Lookup::Unbound
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        match self.lookup(name) {
            Lookup::Bound(value) => Some(value),
            Lookup::Reserved | Lookup::Unbound => None,
        }
    }

    /// Names from newest to oldest, shadowed ones included.
    pub fn names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut current = self.head.as_deref();
        while let Some(frame) = current {
            names.push(frame.name.as_str());
            current = frame.parent.as_deref();
        }
        names
    }
}

impl<T> Clone for Env<T> {
    fn clone(&self) -> Self {
        Env {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for Env<T> {
    fn default() -> Self {
        Env::empty()
    }
}

impl<T> fmt::Debug for Env<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_env() {
        let env: Env<i64> = Env::empty();
        assert_eq!(env.lookup("x"), Lookup::Unbound);
    }

    #[test]
    fn test_extend() {
        let env = Env::empty().extend("x", 1);
        assert_eq!(env.get("x"), Some(&1));
    }

    #[test]
    fn test_extend_shadows() {
        let env = Env::empty().extend("x", 1).extend("x", 2);
        assert_eq!(env.get("x"), Some(&2));
    }

    #[test]
    fn test_child_scope_invisible_to_parent() {
        let parent = Env::empty().extend("x", 1);
        let child = parent.extend("y", 2);
        assert_eq!(child.get("x"), Some(&1));
        assert_eq!(parent.lookup("y"), Lookup::Unbound);
    }

    #[test]
    fn test_reserved_slot_shadows_until_filled() {
        let outer = Env::empty().extend("f", 1);
        let inner = outer.reserve("f");
        assert_eq!(inner.lookup("f"), Lookup::Reserved);
        assert_eq!(inner.fill(2), Ok(()));
        assert_eq!(inner.get("f"), Some(&2));
        assert_eq!(outer.get("f"), Some(&1));
    }

    #[test]
    fn test_fill_twice_is_rejected() {
        let env = Env::empty().reserve("f");
        assert_eq!(env.fill(1), Ok(()));
        assert_eq!(env.fill(2), Err(2));
        assert_eq!(env.get("f"), Some(&1));
    }

    #[test]
    fn test_clones_share_slots() {
        let env = Env::empty().reserve("f");
        let captured = env.clone();
        env.fill(7).unwrap();
        assert_eq!(captured.get("f"), Some(&7));
    }
}
