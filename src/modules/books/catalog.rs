use tokio::sync::RwLock;

use super::models::Book;

pub const SEED_TITLE: &str = "Clean Code";
pub const SEED_AUTHOR: &str = "Robert C. Martin";

/// Ordered, append-only list of books shared by the request handlers.
#[derive(Debug)]
pub struct Catalog {
    books: RwLock<Vec<Book>>,
}

impl Catalog {
    /// Catalog holding only the seed entry.
    pub fn seeded() -> Self {
        Self::with_books([Book::new(SEED_TITLE, SEED_AUTHOR)])
    }

    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: RwLock::new(books.into_iter().collect()),
        }
    }

    /// Snapshot of every book in insertion order.
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// Append `book` and hand it back unchanged.
    pub async fn add(&self, book: Book) -> Book {
        let mut books = self.books.write().await;
        books.push(book.clone());
        tracing::debug!(
            title = %book.title,
            author = %book.author,
            total = books.len(),
            "book added to catalog"
        );
        book
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
