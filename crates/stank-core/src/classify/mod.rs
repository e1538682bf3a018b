pub mod combine;
pub mod prior;

pub use combine::{Verdict, combine};
pub use prior::{TableHits, is_library};
