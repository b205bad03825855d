use crate::domain::model::Person;
use std::cmp::Ordering;

/// Three-way comparison used to order a [`SortedSet`](crate::core::sorted_set::SortedSet).
pub trait Comparer<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders people by age only; names are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortPeopleByAge;

impl Comparer<Person> for SortPeopleByAge {
    fn compare(&self, a: &Person, b: &Person) -> Ordering {
        a.age.cmp(&b.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_people_by_age() {
        let bart = Person::new("Bart", "Simpson", 8);
        let lisa = Person::new("Lisa", "Simpson", 9);
        let other_lisa = Person::new("Lisa", "Jones", 9);

        assert_eq!(SortPeopleByAge.compare(&bart, &lisa), Ordering::Less);
        assert_eq!(SortPeopleByAge.compare(&lisa, &bart), Ordering::Greater);
        assert_eq!(SortPeopleByAge.compare(&lisa, &other_lisa), Ordering::Equal);
    }

    #[test]
    fn test_closure_comparer() {
        let by_last_name = |a: &Person, b: &Person| a.last_name.cmp(&b.last_name);
        let jones = Person::new("Saku", "Jones", 1);
        let simpson = Person::new("Bart", "Simpson", 8);
        assert_eq!(by_last_name.compare(&jones, &simpson), Ordering::Less);
    }
}
