//! The catalog every session starts with.

use crate::book::{Book, BookId};

pub fn default_categories() -> Vec<String> {
    ["Fiction", "Non-Fiction", "Sci-Fi", "Mystery", "Romance", "Biography"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn book(
    id: u64,
    title: &str,
    author: &str,
    category: &str,
    description: &str,
    rating: f64,
    isbn: &str,
) -> Book {
    Book {
        id: BookId(id),
        title: title.to_string(),
        author: author.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        rating,
        cover_image: format!("https://covers.openlibrary.org/b/isbn/{}-M.jpg", isbn),
    }
}

pub fn seed_books() -> Vec<Book> {
    vec![
        book(
            1,
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "Fiction",
            "A classic American novel set in the Jazz Age, exploring themes of wealth, love, and the American Dream.",
            4.5,
            "9780743273565",
        ),
        book(
            2,
            "To Kill a Mockingbird",
            "Harper Lee",
            "Fiction",
            "A powerful story of racial injustice and childhood innocence in the American South.",
            4.8,
            "9780061120084",
        ),
        book(
            3,
            "1984",
            "George Orwell",
            "Sci-Fi",
            "A dystopian novel about totalitarian control and surveillance in a future society.",
            4.7,
            "9780451524935",
        ),
        book(
            4,
            "Sapiens",
            "Yuval Noah Harari",
            "Non-Fiction",
            "A fascinating exploration of how Homo sapiens came to dominate the world.",
            4.6,
            "9780062316097",
        ),
        book(
            5,
            "Dune",
            "Frank Herbert",
            "Sci-Fi",
            "An epic science fiction novel set on the desert planet Arrakis.",
            4.9,
            "9780441013593",
        ),
        book(
            6,
            "The Catcher in the Rye",
            "J.D. Salinger",
            "Fiction",
            "A coming-of-age story following teenager Holden Caulfield in New York City.",
            4.3,
            "9780316769174",
        ),
        book(
            7,
            "Thinking, Fast and Slow",
            "Daniel Kahneman",
            "Non-Fiction",
            "A groundbreaking work on human psychology and decision-making processes.",
            4.4,
            "9780374533557",
        ),
        book(
            8,
            "Foundation",
            "Isaac Asimov",
            "Sci-Fi",
            "The first book in Asimov's epic Foundation series about psychohistory.",
            4.5,
            "9780553293357",
        ),
    ]
}
