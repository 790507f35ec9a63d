use bookshelf::NewBook;

pub fn candidate(title: &str, category: &str) -> NewBook {
    NewBook {
        title: title.to_string(),
        author: "Dan Simmons".to_string(),
        category: category.to_string(),
        description: "A long enough description for the form.".to_string(),
        rating: 4.0,
        cover_image: String::new(),
    }
}

pub fn hyperion() -> NewBook {
    candidate("Hyperion", "Sci-Fi")
}

pub fn titles(books: &[bookshelf::Book]) -> Vec<&str> {
    books.iter().map(|book| book.title.as_str()).collect()
}

pub fn ids(books: &[bookshelf::Book]) -> Vec<u64> {
    books.iter().map(|book| book.id.get()).collect()
}
