pub mod case_book;
pub mod clock;
pub mod ids;
pub mod services;

pub use case_book::{CaseAction, CaseBook, CaseStore};
pub use clock::{Clock, FixedClock, SystemClock};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
