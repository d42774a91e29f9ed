use clap::Parser;
use dotenv::dotenv;

use crate::cli::command::{Cli, Commands};
use crate::domain::{Contact, ContactPatch};
use crate::errors::AppError;
use crate::store::{ContactBook, csv::CsvStore};
use crate::validation::validate_contact;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok(); // .env may supply CONTACTS_PATH before clap reads it

    let cli = Cli::parse();

    let mut book = ContactBook::open(CsvStore::new(&cli.file))?;

    match cli.command {
        Commands::Add {
            name,
            address,
            email,
            mobile,
            home,
        } => {
            let new_contact = Contact::new(name, address, email, mobile, home);

            let errors = validate_contact(&new_contact)?;
            if !errors.is_empty() {
                return Err(AppError::Validation(errors));
            }

            book.add(new_contact)?;

            println!("Contact added successfully");
            Ok(())
        }

        Commands::List => {
            if book.contacts().is_empty() {
                println!("No contacts yet");
                return Ok(());
            }

            for (i, contact) in book.list_sorted().iter().enumerate() {
                print_contact(i + 1, contact);
            }
            Ok(())
        }

        Commands::Edit {
            name,
            address,
            email,
            mobile,
            home,
        } => {
            let patch = ContactPatch {
                address,
                email,
                mobile_phone: mobile,
                home_phone: home,
            };

            if book.update(&name, &patch)? {
                println!("Contact updated successfully");
            } else {
                println!("Contact not found");
            }
            Ok(())
        }

        Commands::Delete { name } => {
            if book.delete(&name)? {
                println!("Contact deleted successfully");
            } else {
                println!("Contact not found");
            }
            Ok(())
        }

        Commands::Search { query } => {
            let results = book.search(&query);

            if results.is_empty() {
                println!("No contacts found");
                return Ok(());
            }

            for (i, contact) in results.iter().enumerate() {
                print_contact(i + 1, contact);
            }
            Ok(())
        }
    }
}

fn print_contact(i: usize, contact: &Contact) {
    println!(
        "{i:>3}. {:<25} {:<30} {:^30} {:15} {:15}",
        contact.full_name,
        contact.address,
        contact.email,
        contact.mobile_phone,
        contact.home_phone
    );
}
