pub mod csv;

use std::fs;
use std::path::Path;

use self::csv::CsvStore;
use crate::domain::{Contact, ContactPatch};
use crate::errors::AppError;

pub const DEFAULT_CONTACTS_PATH: &str = "./contacts.csv";

/// The in-memory contact set mirrored to a CSV file. Constructed once
/// and handed to the front end; every mutation rewrites the whole file.
///
/// `full_name` is the de-facto key. Duplicates are not prevented, so
/// lookup, edit and delete affect the first match only.
pub struct ContactBook {
    store: CsvStore,
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn open(store: CsvStore) -> Result<Self, AppError> {
        let contacts = store.load()?;
        Ok(Self { store, contacts })
    }

    /// All contacts in file order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn add(&mut self, contact: Contact) -> Result<(), AppError> {
        self.contacts.push(contact);
        self.store.save(&self.contacts)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|cont| cont.full_name == name)
    }

    /// Overwrites the first matching contact with the non-empty patch
    /// fields and persists. Returns whether a match was found; a miss
    /// is a normal outcome, not an error.
    pub fn update(&mut self, name: &str, patch: &ContactPatch) -> Result<bool, AppError> {
        let found = self
            .contacts
            .iter_mut()
            .find(|cont| cont.full_name == name);

        match found {
            Some(contact) => {
                patch.apply(contact);
                self.store.save(&self.contacts)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes the first matching contact and persists. Nothing is
    /// written when no contact matched.
    pub fn delete(&mut self, name: &str) -> Result<bool, AppError> {
        let index = self
            .contacts
            .iter()
            .position(|cont| cont.full_name == name);

        match index {
            Some(index) => {
                self.contacts.remove(index);
                self.store.save(&self.contacts)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// All contacts ordered by name, plain lexicographic comparison.
    pub fn list_sorted(&self) -> Vec<&Contact> {
        let mut sorted: Vec<&Contact> = self.contacts.iter().collect();
        sorted.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        sorted
    }

    /// Case-sensitive substring match over name and both phone fields.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|cont| {
                cont.full_name.contains(query)
                    || cont.mobile_phone.contains(query)
                    || cont.home_phone.contains(query)
            })
            .collect()
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    fn contact(name: &str, mobile: &str, home: &str) -> Contact {
        Contact::new(
            name.to_string(),
            "5 Soborna St, Lviv".to_string(),
            "someone@example.com".to_string(),
            mobile.to_string(),
            home.to_string(),
        )
    }

    fn open_book(dir: &tempfile::TempDir) -> Result<ContactBook, AppError> {
        ContactBook::open(CsvStore::new(dir.path().join("contacts.csv")))
    }

    #[test]
    fn added_contact_survives_a_reload() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;

        let mut book = open_book(&dir)?;
        book.add(contact(
            "Olena Shevchenko",
            "+380931234567",
            "+380441234567",
        ))?;

        let reloaded = open_book(&dir)?;
        assert_eq!(
            reloaded.contacts(),
            &[contact(
                "Olena Shevchenko",
                "+380931234567",
                "+380441234567",
            )]
        );
        Ok(())
    }

    #[test]
    fn find_by_name_returns_the_first_match() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;

        let mut book = open_book(&dir)?;
        book.add(contact("Olena Shevchenko", "+380931234567", "+380441111111"))?;
        book.add(contact("Olena Shevchenko", "+380979999999", "+380442222222"))?;

        let found = book.find_by_name("Olena Shevchenko");
        assert_eq!(found.map(|c| c.mobile_phone.as_str()), Some("+380931234567"));

        assert!(book.find_by_name("Andriy Bondar").is_none());
        Ok(())
    }

    #[test]
    fn update_applies_patch_and_reports_found() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;

        let mut book = open_book(&dir)?;
        book.add(contact("Olena Shevchenko", "+380931234567", "+380441234567"))?;

        let patch = ContactPatch {
            mobile_phone: Some("+380971112233".to_string()),
            ..ContactPatch::default()
        };
        assert!(book.update("Olena Shevchenko", &patch)?);
        assert!(!book.update("Andriy Bondar", &patch)?);

        let reloaded = open_book(&dir)?;
        assert_eq!(reloaded.contacts()[0].mobile_phone, "+380971112233");
        assert_eq!(reloaded.contacts()[0].home_phone, "+380441234567");
        Ok(())
    }

    #[test]
    fn delete_removes_only_the_first_match() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;

        let mut book = open_book(&dir)?;
        book.add(contact("Olena Shevchenko", "+380931234567", "+380441111111"))?;
        book.add(contact("Olena Shevchenko", "+380979999999", "+380442222222"))?;
        book.add(contact("Andriy Bondar", "+380501234567", "+380443333333"))?;

        assert!(book.delete("Olena Shevchenko")?);

        let mut remaining = open_book(&dir)?;
        assert_eq!(remaining.contacts().len(), 2);
        assert_eq!(remaining.contacts()[0].mobile_phone, "+380979999999");

        assert!(!remaining.delete("Nobody Here")?);
        assert_eq!(remaining.contacts().len(), 2);
        Ok(())
    }

    #[test]
    fn list_sorted_is_non_decreasing_for_any_input_order() -> Result<(), AppError> {
        let names = ["Taras", "Andriy", "Olena", "Bohdan"];

        // Every rotation of the input order must sort the same way
        for start in 0..names.len() {
            let dir = tempfile::tempdir()?;
            let mut book = open_book(&dir)?;

            for offset in 0..names.len() {
                let name = names[(start + offset) % names.len()];
                book.add(contact(name, "+380931234567", "+380441234567"))?;
            }

            let sorted = book.list_sorted();
            for pair in sorted.windows(2) {
                assert!(pair[0].full_name <= pair[1].full_name);
            }
            assert_eq!(sorted.len(), names.len());
        }
        Ok(())
    }

    #[test]
    fn list_sorted_does_not_reorder_the_stored_set() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;

        let mut book = open_book(&dir)?;
        book.add(contact("Taras", "+380931234567", "+380441234567"))?;
        book.add(contact("Andriy", "+380971112233", "+380442222222"))?;

        let _ = book.list_sorted();

        assert_eq!(book.contacts()[0].full_name, "Taras");
        assert_eq!(book.contacts()[1].full_name, "Andriy");
        Ok(())
    }

    #[test]
    fn search_matches_name_and_both_phones_case_sensitively() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;

        let mut book = open_book(&dir)?;
        book.add(contact("Olena Shevchenko", "+380931234567", "+380441111111"))?;
        book.add(contact("Andriy Bondar", "+380501234567", "+380442222222"))?;

        assert_eq!(book.search("Shevchenko").len(), 1);
        assert_eq!(book.search("shevchenko").len(), 0);
        assert_eq!(book.search("+38050").len(), 1);
        assert_eq!(book.search("+38044").len(), 2);
        assert_eq!(book.search("1234567").len(), 2);
        assert!(book.search("Maria").is_empty());
        Ok(())
    }
}
