//! Data models for Biblio

pub mod book;
pub mod copy;
pub mod loan;
pub mod reader;
pub mod subscription;

// Re-export commonly used types
pub use book::{Author, Book};
pub use copy::{BookCopy, CopyStatus};
pub use loan::{Loan, LoanReturn};
pub use reader::Reader;
pub use subscription::{Notification, Subscription};
