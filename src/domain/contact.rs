use serde::{Deserialize, Serialize};

/// Column order of the persisted file. Must stay in sync with the
/// serde renames on [`Contact`].
pub const CSV_HEADERS: [&str; 5] = [
    "Full Name",
    "Address",
    "Email",
    "Mobile Phone",
    "Home Phone",
];

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Contact {
    #[serde(rename = "Full Name")]
    pub full_name: String,

    #[serde(rename = "Address")]
    pub address: String,

    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "Mobile Phone")]
    pub mobile_phone: String,

    #[serde(rename = "Home Phone")]
    pub home_phone: String,
}

impl Contact {
    pub fn new(
        full_name: String,
        address: String,
        email: String,
        mobile_phone: String,
        home_phone: String,
    ) -> Self {
        Contact {
            full_name,
            address,
            email,
            mobile_phone,
            home_phone,
        }
    }
}

/// Fields submitted on edit. The name is the lookup key and is not
/// editable. `None` or an empty string leaves the stored value as is.
#[derive(Debug, Default, Clone)]
pub struct ContactPatch {
    pub address: Option<String>,
    pub email: Option<String>,
    pub mobile_phone: Option<String>,
    pub home_phone: Option<String>,
}

impl ContactPatch {
    pub fn apply(&self, contact: &mut Contact) {
        apply_field(&mut contact.address, &self.address);
        apply_field(&mut contact.email, &self.email);
        apply_field(&mut contact.mobile_phone, &self.mobile_phone);
        apply_field(&mut contact.home_phone, &self.home_phone);
    }
}

fn apply_field(field: &mut String, submitted: &Option<String>) {
    if let Some(value) = submitted
        && !value.is_empty()
    {
        *field = value.clone();
    }
}
