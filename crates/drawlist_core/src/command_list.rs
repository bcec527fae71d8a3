//! Ordered, owned list of primitives with stable handles
//!
//! Positions in the list decide packing order (and therefore object ids);
//! [`PrimitiveKey`] handles stay valid across insertions, removals and
//! reordering so an owner can keep animating a primitive it added earlier.

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use crate::error::Result;
use crate::geometry::Extent;
use crate::primitive::Primitive;
use crate::registry::PrimitiveKind;

new_key_type! {
    /// Stable handle to a primitive in a [`CommandList`]
    pub struct PrimitiveKey;
}

/// Ordered sequence of primitives
#[derive(Clone, Debug, Default)]
pub struct CommandList {
    primitives: SlotMap<PrimitiveKey, Primitive>,
    order: Vec<PrimitiveKey>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            primitives: SlotMap::with_capacity_and_key(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Append a primitive at the end
    pub fn push(&mut self, primitive: impl Into<Primitive>) -> PrimitiveKey {
        let key = self.primitives.insert(primitive.into());
        self.order.push(key);
        key
    }

    /// Insert at `index`, clamped to the end of the list
    pub fn insert(&mut self, index: usize, primitive: impl Into<Primitive>) -> PrimitiveKey {
        let key = self.primitives.insert(primitive.into());
        self.order.insert(index.min(self.order.len()), key);
        key
    }

    /// Append a freshly initialized primitive of `kind`
    pub fn add_kind(&mut self, kind: PrimitiveKind, extent: Extent) -> PrimitiveKey {
        tracing::debug!("Adding {} primitive", kind);
        self.push(kind.create(extent))
    }

    /// Append a freshly initialized primitive by registry name
    ///
    /// Unknown names fail with a configuration error and leave the list
    /// unchanged.
    pub fn add_named(&mut self, name: &str, extent: Extent) -> Result<PrimitiveKey> {
        let kind: PrimitiveKind = name.parse()?;
        Ok(self.add_kind(kind, extent))
    }

    /// Remove and return the primitive behind `key`
    pub fn remove(&mut self, key: PrimitiveKey) -> Option<Primitive> {
        let primitive = self.primitives.remove(key)?;
        self.order.retain(|k| *k != key);
        Some(primitive)
    }

    /// Remove and return the primitive at `index`
    pub fn remove_at(&mut self, index: usize) -> Option<Primitive> {
        if index >= self.order.len() {
            return None;
        }
        let key = self.order.remove(index);
        self.primitives.remove(key)
    }

    /// Move a primitive to `index` (clamped to the last position)
    ///
    /// Returns `false` if `key` is not in the list.
    pub fn move_to(&mut self, key: PrimitiveKey, index: usize) -> bool {
        let Some(from) = self.position(key) else {
            return false;
        };
        let key = self.order.remove(from);
        self.order.insert(index.min(self.order.len()), key);
        true
    }

    pub fn get(&self, key: PrimitiveKey) -> Option<&Primitive> {
        self.primitives.get(key)
    }

    pub fn get_mut(&mut self, key: PrimitiveKey) -> Option<&mut Primitive> {
        self.primitives.get_mut(key)
    }

    /// Current position of `key` in packing order
    pub fn position(&self, key: PrimitiveKey) -> Option<usize> {
        self.order.iter().position(|k| *k == key)
    }

    pub fn key_at(&self, index: usize) -> Option<PrimitiveKey> {
        self.order.get(index).copied()
    }

    /// Primitives in list order
    pub fn iter(&self) -> impl Iterator<Item = &Primitive> + '_ {
        self.order.iter().filter_map(|key| self.primitives.get(*key))
    }

    /// Mutable primitives in list order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Primitive> + '_ {
        let mut index: SecondaryMap<PrimitiveKey, usize> = SecondaryMap::with_capacity(self.order.len());
        for (i, key) in self.order.iter().enumerate() {
            index.insert(*key, i);
        }

        let mut slots: Vec<Option<&mut Primitive>> = Vec::with_capacity(self.order.len());
        slots.resize_with(self.order.len(), || None);
        for (key, primitive) in self.primitives.iter_mut() {
            if let Some(&i) = index.get(key) {
                slots[i] = Some(primitive);
            }
        }
        slots.into_iter().flatten()
    }

    /// Keys in list order
    pub fn keys(&self) -> impl Iterator<Item = PrimitiveKey> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Drop every primitive; outstanding keys become invalid
    pub fn clear(&mut self) {
        self.primitives.clear();
        self.order.clear();
    }

    /// Replace the whole list, returning the new keys in order
    pub fn replace_all<I>(&mut self, primitives: I) -> Vec<PrimitiveKey>
    where
        I: IntoIterator,
        I::Item: Into<Primitive>,
    {
        self.clear();
        primitives.into_iter().map(|p| self.push(p)).collect()
    }
}

impl FromIterator<Primitive> for CommandList {
    fn from_iter<T: IntoIterator<Item = Primitive>>(iter: T) -> Self {
        let mut list = CommandList::new();
        list.extend(iter);
        list
    }
}

impl Extend<Primitive> for CommandList {
    fn extend<T: IntoIterator<Item = Primitive>>(&mut self, iter: T) {
        for primitive in iter {
            self.push(primitive);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Color, Vec2};
    use crate::primitive::{Circle, Disk, Line};

    fn kinds(list: &CommandList) -> Vec<PrimitiveKind> {
        list.iter().map(Primitive::kind).collect()
    }

    #[test]
    fn test_push_and_order() {
        let mut list = CommandList::new();
        assert!(list.is_empty());
        let a = list.push(Line::default());
        let b = list.push(Circle::default());
        let c = list.push(Disk::default());
        assert_eq!(list.len(), 3);
        assert_eq!(list.keys().collect::<Vec<_>>(), vec![a, b, c]);
        assert_eq!(
            kinds(&list),
            vec![PrimitiveKind::Line, PrimitiveKind::Circle, PrimitiveKind::Disk]
        );
    }

    #[test]
    fn test_insert_clamps_index() {
        let mut list = CommandList::new();
        list.push(Line::default());
        let front = list.insert(0, Disk::default());
        let back = list.insert(99, Circle::default());
        assert_eq!(list.key_at(0), Some(front));
        assert_eq!(list.key_at(2), Some(back));
    }

    #[test]
    fn test_remove_keeps_other_keys_valid() {
        let mut list = CommandList::new();
        let a = list.push(Line::default());
        let b = list.push(Circle::default());
        let c = list.push(Disk::default());

        assert!(matches!(list.remove(b), Some(Primitive::Circle(_))));
        assert!(list.get(b).is_none());
        assert!(list.remove(b).is_none());
        assert_eq!(list.position(a), Some(0));
        assert_eq!(list.position(c), Some(1));

        assert!(matches!(list.remove_at(0), Some(Primitive::Line(_))));
        assert!(list.remove_at(5).is_none());
        assert_eq!(list.position(c), Some(0));
    }

    #[test]
    fn test_move_to_reorders() {
        let mut list = CommandList::new();
        let a = list.push(Line::default());
        let b = list.push(Circle::default());
        let c = list.push(Disk::default());

        assert!(list.move_to(a, 10));
        assert_eq!(list.keys().collect::<Vec<_>>(), vec![b, c, a]);
        assert!(list.move_to(c, 0));
        assert_eq!(list.keys().collect::<Vec<_>>(), vec![c, b, a]);

        list.remove(b);
        assert!(!list.move_to(b, 0));
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut list = CommandList::new();
        let key = list.push(Line::default());
        if let Some(Primitive::Line(line)) = list.get_mut(key) {
            line.end = Vec2::new(0.3, 0.4);
        }
        match list.get(key) {
            Some(Primitive::Line(line)) => assert_eq!(line.end, Vec2::new(0.3, 0.4)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_iter_mut_follows_list_order() {
        let mut list = CommandList::new();
        let a = list.push(Line::default());
        list.push(Line::default());
        list.push(Line::default());
        list.move_to(a, 2);

        for (i, primitive) in list.iter_mut().enumerate() {
            if let Primitive::Line(line) = primitive {
                line.thickness = i as f32;
            }
        }
        let thicknesses: Vec<f32> = list
            .iter()
            .map(|p| match p {
                Primitive::Line(line) => line.thickness,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(thicknesses, vec![0.0, 1.0, 2.0]);
        match list.get(a) {
            Some(Primitive::Line(line)) => assert_eq!(line.thickness, 2.0),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_add_named() {
        let mut list = CommandList::new();
        let key = list.add_named("rounded_rect", Extent::NORMALIZED).unwrap();
        assert_eq!(list.get(key).map(Primitive::kind), Some(PrimitiveKind::RoundedRect));
        assert!(list.add_named("Star", Extent::NORMALIZED).is_err());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_clear_and_replace_all() {
        let mut list: CommandList = vec![
            Primitive::from(Line::default()),
            Primitive::from(Disk::default()),
        ]
        .into_iter()
        .collect();
        let old = list.key_at(0).unwrap();

        let keys = list.replace_all([Circle::new(Vec2::ZERO, 1.0, Color::RED, 0.1)]);
        assert_eq!(keys.len(), 1);
        assert!(list.get(old).is_none());
        assert_eq!(kinds(&list), vec![PrimitiveKind::Circle]);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }
}
