pub use crate::cli::{command, run_app};
pub use crate::domain::contact::{CSV_HEADERS, Contact, ContactPatch};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactBook, csv::CsvStore};
