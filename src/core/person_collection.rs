use crate::domain::model::Person;

/// A collection that only accepts [`Person`] values and keeps them in
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct PersonCollection {
    people: Vec<Person>,
}

impl PersonCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_person(&mut self, person: Person) {
        tracing::trace!("Adding {} to person collection", person.first_name);
        self.people.push(person);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.people.iter()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl<'a> IntoIterator for &'a PersonCollection {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(count: usize) -> Vec<Person> {
        (0..count)
            .map(|i| Person::new(format!("First{}", i), "Last", (i % 3) as i32))
            .collect()
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        for count in [0, 1, 5, 32] {
            let expected = people(count);
            let mut collection = PersonCollection::new();
            for person in expected.iter().cloned() {
                collection.add_person(person);
            }

            let collected: Vec<Person> = collection.iter().cloned().collect();
            assert_eq!(collected, expected);
            assert_eq!(collection.len(), count);
        }
    }

    #[test]
    fn test_iteration_is_restartable() {
        let mut collection = PersonCollection::new();
        collection.add_person(Person::new("Homer", "Simpson", 40));
        collection.add_person(Person::new("Homer", "Simpson", 40));

        let first: Vec<&Person> = (&collection).into_iter().collect();
        let second: Vec<&Person> = collection.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
