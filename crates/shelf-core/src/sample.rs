//! Demo catalog used to seed a fresh library.

use crate::models::{Book, LendingStatus};
use chrono::{DateTime, Duration, Utc};

struct Seed {
    id: &'static str,
    title: &'static str,
    author: &'static str,
    publisher: &'static str,
    year: &'static str,
    description: &'static str,
    pages: u32,
    categories: &'static [&'static str],
    rating: f64,
    cover_id: &'static str,
}

const SEEDS: [Seed; 10] = [
    Seed {
        id: "1",
        title: "The Great Gatsby",
        author: "F. Scott Fitzgerald",
        publisher: "Scribner",
        year: "1925",
        description: "A story of wealth, love, and the American Dream in the 1920s.",
        pages: 180,
        categories: &["Classic", "Literary Fiction"],
        rating: 4.2,
        cover_id: "823857",
    },
    Seed {
        id: "2",
        title: "To Kill a Mockingbird",
        author: "Harper Lee",
        publisher: "J. B. Lippincott & Co.",
        year: "1960",
        description: "A powerful story of racial injustice and moral growth.",
        pages: 281,
        categories: &["Classic", "Literary Fiction"],
        rating: 4.7,
        cover_id: "823856",
    },
    Seed {
        id: "3",
        title: "1984",
        author: "George Orwell",
        publisher: "Secker & Warburg",
        year: "1949",
        description: "A dystopian novel about totalitarianism and surveillance.",
        pages: 328,
        categories: &["Dystopian", "Science Fiction"],
        rating: 4.5,
        cover_id: "823855",
    },
    Seed {
        id: "4",
        title: "Pride and Prejudice",
        author: "Jane Austen",
        publisher: "T. Egerton, Whitehall",
        year: "1813",
        description: "A romantic novel about the Bennet family.",
        pages: 279,
        categories: &["Romance", "Classic"],
        rating: 4.6,
        cover_id: "823853",
    },
    Seed {
        id: "5",
        title: "The Hobbit",
        author: "J.R.R. Tolkien",
        publisher: "Allen & Unwin",
        year: "1937",
        description: "A fantasy novel and prelude to The Lord of the Rings.",
        pages: 310,
        categories: &["Fantasy", "Adventure"],
        rating: 4.7,
        cover_id: "823821",
    },
    Seed {
        id: "6",
        title: "Dune",
        author: "Frank Herbert",
        publisher: "Chilton Books",
        year: "1965",
        description: "A science fiction epic about politics and ecology.",
        pages: 412,
        categories: &["Science Fiction"],
        rating: 4.8,
        cover_id: "823840",
    },
    Seed {
        id: "7",
        title: "The Hunger Games",
        author: "Suzanne Collins",
        publisher: "Scholastic",
        year: "2008",
        description: "A dystopian novel about a televised fight to the death.",
        pages: 374,
        categories: &["Young Adult", "Dystopian"],
        rating: 4.3,
        cover_id: "823765",
    },
    Seed {
        id: "8",
        title: "The Shining",
        author: "Stephen King",
        publisher: "Doubleday",
        year: "1977",
        description: "A psychological horror novel about a haunted hotel.",
        pages: 447,
        categories: &["Horror"],
        rating: 4.3,
        cover_id: "823785",
    },
    Seed {
        id: "9",
        title: "The Silent Patient",
        author: "Alex Michaelides",
        publisher: "Celadon Books",
        year: "2019",
        description: "A psychological thriller about a woman who shoots her husband.",
        pages: 323,
        categories: &["Thriller", "Mystery"],
        rating: 4.2,
        cover_id: "823808",
    },
    Seed {
        id: "10",
        title: "Where the Crawdads Sing",
        author: "Delia Owens",
        publisher: "G.P. Putnam's Sons",
        year: "2018",
        description: "A novel about an abandoned girl who raises herself in the marshes.",
        pages: 368,
        categories: &["Literary Fiction", "Mystery"],
        rating: 4.8,
        cover_id: "823807",
    },
];

impl Seed {
    fn to_book(&self, now: DateTime<Utc>) -> Book {
        let mut book = Book::new(self.id, self.title, vec![self.author.to_string()], now);
        book.publisher = Some(self.publisher.to_string());
        book.published_date = Some(self.year.to_string());
        book.description = Some(self.description.to_string());
        book.page_count = Some(self.pages);
        book.categories = self.categories.iter().map(|c| c.to_string()).collect();
        book.average_rating = Some(self.rating);
        book.cover_id = Some(self.cover_id.to_string());
        book
    }
}

/// Ten classics with a mix of owned, borrowed, started and finished books.
///
/// Due and read dates are placed relative to `now`.
pub fn sample_books(now: DateTime<Utc>) -> Vec<Book> {
    let mut books: Vec<Book> = SEEDS.iter().map(|seed| seed.to_book(now)).collect();

    for book in &mut books {
        match book.id.as_str() {
            "1" => {
                book.is_in_library = true;
                book.user_rating = Some(4);
            }
            "2" => {
                book.status = LendingStatus::CheckedOut;
                book.due_date = Some(now + Duration::days(7));
            }
            "3" => {
                book.reading_progress = 0.3;
                book.last_read_date = Some(now - Duration::days(1));
            }
            "4" | "8" => book.is_read = true,
            "5" | "7" => book.is_in_library = true,
            "6" => {
                book.status = LendingStatus::CheckedOut;
                book.due_date = Some(now + Duration::days(3));
            }
            _ => {}
        }
    }
    books
}
