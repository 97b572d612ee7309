//! Slot arena with generational handles.
//!
//! Removing a value bumps its slot's generation, so a handle kept past removal never resolves to
//! whatever value later reuses the slot.

/// Handle types addressing an [Arena] slot.
pub(crate) trait ArenaKey: Copy {
    fn from_parts(index: u32, generation: u32) -> Self;
    fn index(self) -> usize;
    fn generation(self) -> u32;
}

/// Implements [ArenaKey] for a `{ index: u32, generation: u32 }` handle struct.
macro_rules! impl_arena_key {
    ($($key:ty),+) => {
        $(
            impl $crate::index::arena::ArenaKey for $key {
                #[inline]
                fn from_parts(index: u32, generation: u32) -> Self {
                    Self { index, generation }
                }

                #[inline]
                fn index(self) -> usize {
                    self.index as usize
                }

                #[inline]
                fn generation(self) -> u32 {
                    self.generation
                }
            }
        )+
    };
}

pub(crate) use impl_arena_key;

#[derive(Debug, Clone)]
struct Slot<V> {
    generation: u32,
    value: Option<V>,
}

#[derive(Debug, Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Slot<V>>,
    free: Vec<u32>,
    len: usize,
    _key: std::marker::PhantomData<K>,
}

impl<K, V> Arena<K, V>
where
    K: ArenaKey,
{
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
            _key: std::marker::PhantomData,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn insert(&mut self, value: V) -> K {
        self.len += 1;
        match self.free.pop() {
            Some(i) => {
                let slot = &mut self.slots[i as usize];
                slot.value = Some(value);
                K::from_parts(i, slot.generation)
            }
            None => {
                let i = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    value: Some(value),
                });
                K::from_parts(i, 0)
            }
        }
    }

    #[inline]
    pub(crate) fn get(&self, key: K) -> Option<&V> {
        self.slots
            .get(key.index())
            .filter(|s| s.generation == key.generation())
            .and_then(|s| s.value.as_ref())
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, key: K) -> Option<&mut V> {
        self.slots
            .get_mut(key.index())
            .filter(|s| s.generation == key.generation())
            .and_then(|s| s.value.as_mut())
    }

    /// Takes the value out, `None` if `key` is stale.
    pub(crate) fn remove(&mut self, key: K) -> Option<V> {
        let slot = self
            .slots
            .get_mut(key.index())
            .filter(|s| s.generation == key.generation())?;
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(key.index() as u32);
        self.len -= 1;
        Some(value)
    }

    /// Drops every value. Slots are kept so handles issued before stay stale.
    pub(crate) fn clear(&mut self) {
        self.free.clear();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(i as u32);
        }
        self.len = 0;
    }

    /// Live entries in slot order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (K, &V)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            s.value
                .as_ref()
                .map(|v| (K::from_parts(i as u32, s.generation), v))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Copy, Clone, PartialEq)]
    struct Key {
        index: u32,
        generation: u32,
    }

    impl_arena_key!(Key);

    #[test]
    fn stale_key_does_not_alias_reused_slot() {
        let mut arena: Arena<Key, &str> = Arena::new();
        let a = arena.insert("a");
        assert_eq!(arena.remove(a), Some("a"));
        let b = arena.insert("b");
        assert_eq!(a.index, b.index);
        assert_ne!(a, b);
        assert!(arena.get(a).is_none());
        assert!(arena.remove(a).is_none());
        assert_eq!(arena.get(b), Some(&"b"));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn clear_invalidates_keys() {
        let mut arena: Arena<Key, u8> = Arena::new();
        let a = arena.insert(1);
        arena.insert(2);
        arena.clear();
        assert_eq!(arena.len(), 0);
        let c = arena.insert(3);
        assert!(arena.get(a).is_none());
        assert_eq!(arena.get(c), Some(&3));
        assert_eq!(arena.iter().count(), 1);
    }
}
