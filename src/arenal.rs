use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::num::NonZeroU32;
use std::ops::{Index, IndexMut};

/// Generational arena. Slots are reused after removal; stale indices are
/// detected by their generation and never alias a newer value.
pub struct Arenal<T> {
    entries: Vec<Entry<T>>,
    free_list: Vec<OffsetType>,
    len: usize,
}

type OffsetType = u32;
type Generation = NonZeroU32;

enum Entry<T> {
    Occupied(Occupied<T>),
    Empty(Empty),
}

struct Occupied<T> {
    generation: Generation,
    value: T,
}

struct Empty {
    next_generation: Generation,
}

pub struct Idx<T> {
    generation: Generation,
    offset: OffsetType,
    marker: std::marker::PhantomData<fn() -> T>,
}

impl<T> Clone for Idx<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Idx<T> {}

impl<T> PartialEq for Idx<T> {
    fn eq(&self, other: &Self) -> bool {
        self.generation == other.generation && self.offset == other.offset
    }
}

impl<T> Eq for Idx<T> {}

impl<T> Hash for Idx<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.generation.hash(state);
        self.offset.hash(state);
    }
}

impl<T> Debug for Idx<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Idx({}v{})", self.offset, self.generation)
    }
}

impl<T> Idx<T> {
    fn new(offset: OffsetType, generation: Generation) -> Self {
        Self {
            generation,
            offset,
            marker: std::marker::PhantomData,
        }
    }
}

impl<T> Default for Arenal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arenal<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, value: T) -> Idx<T> {
        self.len += 1;
        if let Some(offset) = self.free_list.pop() {
            let slot = &mut self.entries[offset as usize];
            let generation = match slot {
                Entry::Empty(Empty { next_generation }) => *next_generation,
                Entry::Occupied(_) => unreachable!("free list points at occupied slot"),
            };
            *slot = Entry::Occupied(Occupied { generation, value });
            return Idx::new(offset, generation);
        }
        let generation = Generation::MIN;
        let offset = self.entries.len() as OffsetType;
        self.entries
            .push(Entry::Occupied(Occupied { generation, value }));
        Idx::new(offset, generation)
    }

    pub fn remove(&mut self, idx: Idx<T>) -> Option<T> {
        let slot = self.entries.get_mut(idx.offset as usize)?;
        match slot {
            Entry::Occupied(occupied) if occupied.generation == idx.generation => {}
            _ => return None,
        }
        // Exhausted slots are retired instead of wrapping around.
        let next_generation = idx.generation.checked_add(1);
        let empty = Entry::Empty(Empty {
            next_generation: next_generation.unwrap_or(Generation::MAX),
        });
        let Entry::Occupied(Occupied { value, .. }) = std::mem::replace(slot, empty) else {
            return None;
        };
        if next_generation.is_some() {
            self.free_list.push(idx.offset);
        }
        self.len -= 1;
        Some(value)
    }

    pub fn contains(&self, idx: Idx<T>) -> bool {
        self.get(idx).is_some()
    }

    pub fn get(&self, idx: Idx<T>) -> Option<&T> {
        match self.entries.get(idx.offset as usize)? {
            Entry::Occupied(Occupied { generation, value }) if *generation == idx.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    pub fn get_mut(&mut self, idx: Idx<T>) -> Option<&mut T> {
        match self.entries.get_mut(idx.offset as usize)? {
            Entry::Occupied(Occupied { generation, value }) if *generation == idx.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    pub fn entries(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut().filter_map(|item| {
            if let Entry::Occupied(o) = item {
                Some(&mut o.value)
            } else {
                None
            }
        })
    }
}

impl<T> Index<Idx<T>> for Arenal<T> {
    type Output = T;
    fn index(&self, idx: Idx<T>) -> &T {
        match self.get(idx) {
            Some(value) => value,
            None => panic!("stale or foreign index {:?}", idx),
        }
    }
}

impl<T> IndexMut<Idx<T>> for Arenal<T> {
    fn index_mut(&mut self, idx: Idx<T>) -> &mut T {
        match self.get_mut(idx) {
            Some(value) => value,
            None => panic!("stale or foreign index {:?}", idx),
        }
    }
}
