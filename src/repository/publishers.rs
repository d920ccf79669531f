//! Publisher store and its seed data

use super::MemoryStore;
use crate::models::Publisher;

pub type PublishersRepository = MemoryStore<Publisher>;

const SEED: [(&str, &str); 10] = [
    ("O'Reilly Media", "USA"),
    ("Addison-Wesley", "USA"),
    ("Manning Publications", "USA"),
    ("Packt Publishing", "UK"),
    ("Apress", "USA"),
    ("No Starch Press", "USA"),
    ("Pearson", "USA"),
    ("Springer", "Germany"),
    ("Cambridge University Press", "UK"),
    ("Typotex Kiadó", "Hungary"),
];

/// Publishers available at startup, ids 1 to 10
pub fn seed_publishers() -> Vec<Publisher> {
    (1..)
        .zip(SEED)
        .map(|(id, (name, country))| Publisher {
            id,
            name: name.to_string(),
            country: country.to_string(),
        })
        .collect()
}
