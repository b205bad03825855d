use crate::domain::ports::Comparer;

/// A set kept in the order defined by its [`Comparer`].
///
/// Two elements the comparer reports as `Equal` are the same element as far
/// as the set is concerned: adding the second one is a no-op that returns
/// `false`, and the element already stored is kept.
#[derive(Debug, Clone)]
pub struct SortedSet<T, C> {
    items: Vec<T>,
    comparer: C,
}

impl<T, C: Comparer<T>> SortedSet<T, C> {
    pub fn with_comparer(comparer: C) -> Self {
        Self {
            items: Vec::new(),
            comparer,
        }
    }

    pub fn from_iter_with<I>(comparer: C, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::with_comparer(comparer);
        for item in items {
            set.add(item);
        }
        set
    }

    pub fn add(&mut self, item: T) -> bool {
        match self
            .items
            .binary_search_by(|probe| self.comparer.compare(probe, &item))
        {
            Ok(_) => false,
            Err(position) => {
                self.items.insert(position, item);
                true
            }
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items
            .binary_search_by(|probe| self.comparer.compare(probe, item))
            .is_ok()
    }

    pub fn min(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn max(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T, C> IntoIterator for &'a SortedSet<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
