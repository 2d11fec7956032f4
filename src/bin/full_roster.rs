use roster::{Person, PersonList};

fn main() {
    let people: PersonList = [
        Person::new("Lily Aldrin", 27),
        Person::new("Marshall Eriksen", 27),
        Person::new("Robin Scherbatsky", 25),
    ]
    .into_iter()
    .map(Result::unwrap)
    .collect();

    println!("{people}");
}
