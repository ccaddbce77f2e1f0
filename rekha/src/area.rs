//! Typed object store shared between readers and finders.
//!
//! An [`Area`] maps an object kind (its Rust type) to the insertion-ordered
//! list of objects of that kind. Readers fill it with [`Point2D`]s, finders
//! append [`Segment2D`]s. Nothing is ever removed.
//!
//! ```
//! use rekha::Area;
//! use rekha::core::{Point2D, Segment2D};
//!
//! let mut area = Area::new();
//! area.add_object(Point2D::new(1.0, 1.0));
//! assert_eq!(area.get_objects::<Point2D>().len(), 1);
//! assert!(area.get_objects::<Segment2D>().is_empty());
//! ```
//!
//! [`Point2D`]: crate::core::Point2D
//! [`Segment2D`]: crate::core::Segment2D

use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Multimap from object kind to objects of that kind.
#[derive(Default)]
pub struct Area {
    objects: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Area {
    /// Create an empty area.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all objects of kind `T`, in insertion order.
    ///
    /// Returns an empty vector if the kind has never been added.
    pub fn get_objects<T>(&self) -> Vec<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.slice::<T>().to_vec()
    }

    /// Borrow all objects of kind `T` without copying.
    pub fn slice<T>(&self) -> &[T]
    where
        T: Send + Sync + 'static,
    {
        self.objects
            .get(&TypeId::of::<T>())
            .and_then(|list| list.downcast_ref::<Vec<T>>())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Append one object, creating the kind's collection on first use.
    pub fn add_object<T>(&mut self, object: T)
    where
        T: Send + Sync + 'static,
    {
        self.list_mut::<T>().push(object);
    }

    /// Append many objects of the same kind.
    pub fn extend_objects<T, I>(&mut self, objects: I)
    where
        T: Send + Sync + 'static,
        I: IntoIterator<Item = T>,
    {
        self.list_mut::<T>().extend(objects);
    }

    /// Number of objects of kind `T`.
    pub fn count<T>(&self) -> usize
    where
        T: Send + Sync + 'static,
    {
        self.slice::<T>().len()
    }

    /// Number of distinct kinds stored.
    pub fn kinds(&self) -> usize {
        self.objects.len()
    }

    fn list_mut<T>(&mut self) -> &mut Vec<T>
    where
        T: Send + Sync + 'static,
    {
        let entry = self
            .objects
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(Vec::<T>::new()));
        match entry.downcast_mut::<Vec<T>>() {
            Some(list) => list,
            None => unreachable!("area entries are keyed by their element type"),
        }
    }
}

impl std::fmt::Debug for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Area").field("kinds", &self.kinds()).finish()
    }
}
