//! Reusable slot storage with generational ids.
//!
//! Allocation takes the first free slot or appends a new one. Release clears
//! the slot in place; storage never shrinks or compacts, so the index of a
//! live record is stable until it is released.

use rubble_core::types::SlotId;

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Dense pool of `T` addressed by `SlotId`.
#[derive(Debug, Clone)]
pub struct SlotPool<T> {
    slots: Vec<Slot<T>>,
    live: usize,
}

impl<T> SlotPool<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            live: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            live: 0,
        }
    }

    /// Allocate a slot and fill it with the record built by `make`, which is
    /// given the id the record will live under.
    pub fn insert_with(&mut self, make: impl FnOnce(SlotId) -> T) -> SlotId {
        let index = match self.slots.iter().position(|s| s.value.is_none()) {
            Some(index) => index,
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    value: None,
                });
                self.slots.len() - 1
            }
        };
        let slot = &mut self.slots[index];
        let id = SlotId::new(index as u32, slot.generation);
        slot.value = Some(make(id));
        self.live += 1;
        id
    }

    pub fn insert(&mut self, value: T) -> SlotId {
        self.insert_with(|_| value)
    }

    /// Release a live slot and return its record.
    ///
    /// # Panics
    /// If `id` is stale or was never allocated.
    pub fn release(&mut self, id: SlotId) -> T {
        let value = self
            .slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| {
                let value = s.value.take()?;
                s.generation = s.generation.wrapping_add(1);
                Some(value)
            })
            .unwrap_or_else(|| panic!("release of slot {id} that is not in use"));
        self.live -= 1;
        value
    }

    pub fn is_live(&self, id: SlotId) -> bool {
        self.try_get(id).is_some()
    }

    pub fn try_get(&self, id: SlotId) -> Option<&T> {
        self.slots
            .get(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.value.as_ref())
    }

    pub fn try_get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.value.as_mut())
    }

    /// # Panics
    /// If `id` is stale or was never allocated.
    pub fn get(&self, id: SlotId) -> &T {
        self.try_get(id)
            .unwrap_or_else(|| panic!("access to slot {id} that is not in use"))
    }

    /// # Panics
    /// If `id` is stale or was never allocated.
    pub fn get_mut(&mut self, id: SlotId) -> &mut T {
        self.try_get_mut(id)
            .unwrap_or_else(|| panic!("access to slot {id} that is not in use"))
    }

    /// Id of the live record at `index`, if any.
    pub fn id_at(&self, index: usize) -> Option<SlotId> {
        self.slots
            .get(index)
            .filter(|s| s.value.is_some())
            .map(|s| SlotId::new(index as u32, s.generation))
    }

    /// Number of slots ever allocated, live or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Ids of all live records in slot order.
    pub fn ids(&self) -> Vec<SlotId> {
        (0..self.slots.len()).filter_map(|i| self.id_at(i)).collect()
    }

    /// Iterate live records in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            s.value
                .as_ref()
                .map(|v| (SlotId::new(i as u32, s.generation), v))
        })
    }

    /// Drop every record and the storage behind them.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.live = 0;
    }
}

impl<T> Default for SlotPool<T> {
    fn default() -> Self {
        Self::new()
    }
}
