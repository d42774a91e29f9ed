pub mod contact;

pub use contact::{CSV_HEADERS, Contact, ContactPatch};
