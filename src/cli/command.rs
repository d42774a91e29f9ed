use clap::{Parser, Subcommand};

use crate::store::DEFAULT_CONTACTS_PATH;

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Simple CSV-backed contact book")]
pub struct Cli {
    /// Path to the contacts CSV file
    #[arg(long, env = "CONTACTS_PATH", default_value_t = String::from(DEFAULT_CONTACTS_PATH))]
    pub file: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Full name
        #[arg(long)]
        name: String,

        /// Postal address
        #[arg(long)]
        address: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Mobile phone (+380 followed by 9 digits)
        #[arg(long)]
        mobile: String,

        /// Home phone (+380 followed by 9 digits)
        #[arg(long)]
        home: String,
    },
    /// List all contacts, ordered by name
    List,
    /// Edit an existing contact found by its exact name.
    /// Only the fields you pass are overwritten
    Edit {
        /// Full name of the contact to edit
        #[arg(long)]
        name: String,

        /// New postal address
        #[arg(long)]
        address: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New mobile phone
        #[arg(long)]
        mobile: Option<String>,

        /// New home phone
        #[arg(long)]
        home: Option<String>,
    },
    /// Delete a contact by its exact name
    Delete {
        /// Full name of the contact to delete
        #[arg(long)]
        name: String,
    },
    /// Find contacts by a substring of the name or either phone number
    Search {
        /// Text to look for
        #[arg(long)]
        query: String,
    },
}
