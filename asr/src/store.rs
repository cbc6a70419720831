/// Handle to a mesh owned by the [`Renderer`](crate::Renderer).
///
/// Ids of destroyed meshes stay dead: a slot reused by a later upload gets a
/// new generation, so an old id never resolves to the new mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryId {
    index: u32,
    generation: u32,
}

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Generational slot storage plus the "current" selection used by `draw`.
pub struct GeometryStore<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    current: Option<GeometryId>,
}

impl<T> Default for GeometryStore<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            current: None,
        }
    }
}

impl<T> GeometryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: T) -> GeometryId {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.generation += 1;
                slot.value = Some(value);
                GeometryId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    value: Some(value),
                });
                GeometryId {
                    index,
                    generation: 0,
                }
            }
        }
    }

    pub fn get(&self, id: GeometryId) -> Option<&T> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    pub fn contains(&self, id: GeometryId) -> bool {
        self.get(id).is_some()
    }

    /// Takes the value out. Clears the current selection if it pointed here.
    pub fn remove(&mut self, id: GeometryId) -> Option<T> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)?;
        let value = slot.value.take()?;
        self.free.push(id.index);
        if self.current == Some(id) {
            self.current = None;
        }
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Selects `id`, or clears the selection for `None`. An id that no
    /// longer resolves clears it too; the return value says whether a
    /// live value is now current.
    pub fn select(&mut self, id: Option<GeometryId>) -> bool {
        self.current = id.filter(|&id| self.contains(id));
        self.current.is_some()
    }

    pub fn current_id(&self) -> Option<GeometryId> {
        self.current
    }

    pub fn current(&self) -> Option<&T> {
        self.current.and_then(|id| self.get(id))
    }

    /// # Panics
    /// When nothing is selected.
    pub fn expect_current(&self) -> &T {
        match self.current() {
            Some(value) => value,
            None => panic!("draw called with no current geometry"),
        }
    }
}
