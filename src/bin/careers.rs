use roster::{Person, PersonList};

fn main() {
    let people = PersonList::new(vec![
        Person::new("Winston Bishop", 40).unwrap(),
        Person::new("Jessica Day", 41).unwrap(),
    ]);

    for person in &people {
        println!("{}", person.career());
    }
}
