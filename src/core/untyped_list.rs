use crate::core::boxed::{BoxedValue, Unbox};
use crate::utils::error::{CollectionsError, Result};

/// A list that accepts any boxable value. Nothing stops a caller from
/// mixing kinds, so every typed read can fail.
#[derive(Debug, Clone, Default)]
pub struct UntypedList {
    items: Vec<BoxedValue>,
}

impl UntypedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: impl Into<BoxedValue>) -> usize {
        let value = value.into();
        tracing::trace!("Boxing {} value into untyped list", value.type_name());
        self.items.push(value);
        self.items.len() - 1
    }

    pub fn get(&self, index: usize) -> Result<&BoxedValue> {
        self.items
            .get(index)
            .ok_or(CollectionsError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
    }

    pub fn get_as<T: Unbox>(&self, index: usize) -> Result<T> {
        self.get(index)?.unbox()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BoxedValue> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_values() {
        let mut list = UntypedList::new();
        assert_eq!(list.add(true), 0);
        assert_eq!(list.add(66), 1);
        assert_eq!(list.add(2.5), 2);

        assert!(list.get_as::<bool>(0).unwrap());
        assert_eq!(list.get_as::<i32>(1).unwrap(), 66);
        assert!(matches!(
            list.get_as::<i32>(2),
            Err(CollectionsError::InvalidCast { .. })
        ));
    }

    #[test]
    fn test_out_of_range() {
        let list = UntypedList::new();
        assert!(list.is_empty());
        assert!(matches!(
            list.get(0),
            Err(CollectionsError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }
}
