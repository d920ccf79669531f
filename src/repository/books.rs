//! Book store and its seed data

use super::MemoryStore;
use crate::models::Book;

pub type BooksRepository = MemoryStore<Book>;

const SEED: [(&str, &str, i64); 12] = [
    ("Go in Action", "William Kennedy", 1),
    ("The Go Programming Language", "Alan A. A. Donovan", 1),
    ("Introducing Go", "Caleb Doxsey", 2),
    ("Go Web Programming", "Sau Sheong Chang", 2),
    ("Go Programming Blueprints", "Mat Ryer", 3),
    ("Learning Go", "Jon Bodner", 3),
    ("Concurrency in Go", "Katherine Cox-Buday", 4),
    ("Go Systems Programming", "Mihalis Tsoukalos", 4),
    ("Network Programming with Go", "Adam Woodbeck", 5),
    ("Go Design Patterns", "Mario Castro Contreras", 5),
    ("Mastering Go", "Mihalis Tsoukalos", 6),
    ("Hands-On High Performance with Go", "Bob Strecansky", 6),
];

/// Books available at startup, ids 1 to 12
pub fn seed_books() -> Vec<Book> {
    (1..)
        .zip(SEED)
        .map(|(id, (title, author, publisher_id))| Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            publisher_id,
        })
        .collect()
}
