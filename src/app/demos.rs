use crate::core::boxed::BoxedValue;
use crate::core::dictionary::Dictionary;
use crate::core::person_collection::PersonCollection;
use crate::core::queue::Queue;
use crate::core::sorted_set::SortedSet;
use crate::core::untyped_list::UntypedList;
use crate::domain::model::{OperatingSystem, Person, PlatformId};
use crate::domain::ports::SortPeopleByAge;
use crate::utils::error::{CollectionsError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Every demonstration routine the program knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Demo {
    SimpleBoxUnbox,
    ArrayList,
    ArrayListOfRandomObjects,
    PersonCollection,
    GenericList,
    GenericQueue,
    SortedSet,
    Dictionary,
}

impl Demo {
    pub const ALL: [Demo; 8] = [
        Demo::SimpleBoxUnbox,
        Demo::ArrayList,
        Demo::ArrayListOfRandomObjects,
        Demo::PersonCollection,
        Demo::GenericList,
        Demo::GenericQueue,
        Demo::SortedSet,
        Demo::Dictionary,
    ];

    /// What a run without any configuration shows.
    pub const DEFAULT: [Demo; 2] = [Demo::PersonCollection, Demo::GenericList];

    pub fn name(self) -> &'static str {
        match self {
            Demo::SimpleBoxUnbox => "simple-box-unbox",
            Demo::ArrayList => "array-list",
            Demo::ArrayListOfRandomObjects => "array-list-of-random-objects",
            Demo::PersonCollection => "person-collection",
            Demo::GenericList => "generic-list",
            Demo::GenericQueue => "generic-queue",
            Demo::SortedSet => "sorted-set",
            Demo::Dictionary => "dictionary",
        }
    }

    pub fn run(self, out: &mut dyn Write) -> Result<()> {
        tracing::debug!("Running demo '{}'", self.name());
        match self {
            Demo::SimpleBoxUnbox => simple_box_unbox(out),
            Demo::ArrayList => work_with_array_list(out),
            Demo::ArrayListOfRandomObjects => array_list_of_random_objects(out),
            Demo::PersonCollection => use_person_collection(out),
            Demo::GenericList => use_generic_list(out),
            Demo::GenericQueue => use_generic_queue(out),
            Demo::SortedSet => use_sorted_set(out),
            Demo::Dictionary => use_dictionary(out),
        }
    }
}

fn simple_box_unbox(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "***** Simple Box / Unbox *****")?;
    writeln!(out)?;

    let my_int: i32 = 25;
    let boxed_int = BoxedValue::from(my_int);
    writeln!(out, "Boxed {} as {}", boxed_int, boxed_int.type_name())?;

    // Reading back with the wrong width is refused.
    match boxed_int.unbox::<i64>() {
        Ok(unboxed) => writeln!(out, "Unboxed {}", unboxed)?,
        Err(e @ CollectionsError::InvalidCast { .. }) => {
            tracing::debug!("Caught expected cast failure: {}", e);
            writeln!(out, "{}", e)?;
        }
        Err(e) => return Err(e),
    }

    let unboxed_int: i32 = boxed_int.unbox()?;
    writeln!(out, "Unboxed {} as i32", unboxed_int)?;
    Ok(())
}

fn work_with_array_list(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "***** Untyped List of Ints *****")?;
    writeln!(out)?;

    let mut my_ints = UntypedList::new();
    my_ints.add(10);
    my_ints.add(20);
    my_ints.add(35);

    for index in 0..my_ints.len() {
        let value: i32 = my_ints.get_as(index)?;
        writeln!(out, "myInts[{}] = {}", index, value)?;
    }
    Ok(())
}

#[allow(clippy::approx_constant)]
fn array_list_of_random_objects(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "***** Untyped List of Random Objects *****")?;
    writeln!(out)?;

    let mut all_my_objects = UntypedList::new();
    all_my_objects.add(true);
    all_my_objects.add(OperatingSystem::new(PlatformId::MacOsx, 10, 0));
    all_my_objects.add(66);
    all_my_objects.add(3.14);

    for item in all_my_objects.iter() {
        writeln!(out, "{}: {}", item.type_name(), item)?;
    }
    Ok(())
}

fn use_person_collection(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "***** Custom Person Collection *****")?;
    writeln!(out)?;

    let mut my_people = PersonCollection::new();
    my_people.add_person(Person::new("Homer", "Simpson", 40));
    my_people.add_person(Person::new("Marge", "Simpson", 38));
    my_people.add_person(Person::new("Code", "Lean", 9));
    my_people.add_person(Person::new("Bart", "Simpson", 7));
    my_people.add_person(Person::new("Maggie", "Simpson", 2));

    for person in &my_people {
        writeln!(out, "{}", person)?;
    }
    Ok(())
}

fn use_generic_list(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "***** Fun with Generics *****")?;
    writeln!(out)?;

    let more_people: Vec<Person> = vec![Person::new("Frank", "Black", 50)];
    writeln!(out, "{}", element_at(&more_people, 0)?)?;

    let more_ints: Vec<i32> = vec![10, 2];
    let first = *element_at(&more_ints, 0)?;
    let second = *element_at(&more_ints, 1)?;
    writeln!(out, "{} + {} = {}", first, second, first + second)?;
    Ok(())
}

fn element_at<T>(items: &[T], index: usize) -> Result<&T> {
    items.get(index).ok_or(CollectionsError::IndexOutOfRange {
        index,
        len: items.len(),
    })
}

fn get_coffee(out: &mut dyn Write, person: &Person) -> Result<()> {
    writeln!(out, "{} got coffee", person.first_name)?;
    Ok(())
}

fn use_generic_queue(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "***** Fun with Queue *****")?;
    writeln!(out)?;

    let mut people_q = Queue::new();
    people_q.enqueue(Person::new("Homer", "Simpson", 47));
    people_q.enqueue(Person::new("Marge", "Simpson", 45));
    people_q.enqueue(Person::new("Lisa", "Simpson", 9));

    writeln!(out, "{} is first in line!", people_q.peek()?.first_name)?;

    get_coffee(out, &people_q.dequeue()?)?;
    get_coffee(out, &people_q.dequeue()?)?;
    get_coffee(out, &people_q.dequeue()?)?;

    match people_q.dequeue() {
        Ok(person) => get_coffee(out, &person)?,
        Err(e @ CollectionsError::EmptyContainer { .. }) => {
            tracing::debug!("Caught expected empty queue failure: {}", e);
            writeln!(out, "Error! {}", e)?;
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

fn use_sorted_set(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "***** Fun with SortedSet *****")?;
    writeln!(out)?;

    let mut set_of_people = SortedSet::from_iter_with(
        SortPeopleByAge,
        [
            Person::new("Homer", "Simpson", 47),
            Person::new("Marge", "Simpson", 45),
            Person::new("Lisa", "Simpson", 9),
            Person::new("Bart", "Simpson", 8),
        ],
    );

    for person in &set_of_people {
        writeln!(out, "{}", person)?;
    }
    writeln!(out)?;

    set_of_people.add(Person::new("Saku", "Jones", 1));
    set_of_people.add(Person::new("Mikko", "Jones", 32));

    for person in &set_of_people {
        writeln!(out, "{}", person)?;
    }
    Ok(())
}

fn use_dictionary(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "***** Fun with Dictionary *****")?;
    writeln!(out)?;

    let mut people_a: Dictionary<String, Person> = Dictionary::new();
    let attempts = [
        Person::new("Homer", "Simpson", 47),
        Person::new("Marge", "Simpson", 45),
        Person::new("Lisa", "Simpson", 9),
    ];
    for person in attempts {
        match people_a.add("Homer".to_string(), person) {
            Ok(()) => {}
            Err(e @ CollectionsError::DuplicateKey { .. }) => {
                tracing::debug!("Caught expected duplicate key failure: {}", e);
                writeln!(out, "Error! {}", e)?;
            }
            Err(e) => return Err(e),
        }
    }

    let homer = people_a.get("Homer")?;
    writeln!(out, "{}", homer)?;

    let people_b = Dictionary::try_from_pairs([
        ("Homer".to_string(), Person::new("Homer", "Simpson", 47)),
        ("Marge".to_string(), Person::new("Marge", "Simpson", 45)),
        ("Lisa".to_string(), Person::new("Lisa", "Simpson", 9)),
    ])?;

    let lisa = people_b.get("Lisa")?;
    writeln!(out, "{}", lisa)?;

    let mut people_c: Dictionary<String, Person> = Dictionary::new();
    people_c.insert("Homer".to_string(), Person::new("Homer", "Simpson", 47));
    people_c.insert("Marge".to_string(), Person::new("Marge", "Simpson", 45));
    people_c.insert("Lisa".to_string(), Person::new("Lisa", "Simpson", 9));

    let marge = people_c.get("Marge")?;
    writeln!(out, "{}", marge)?;
    Ok(())
}
