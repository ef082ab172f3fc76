//! Messaging contacts, derived from the employee directory.
//!
//! Contacts are never persisted: they are rebuilt from whatever employee
//! list the caller holds, falling back to a small static sample when the
//! directory is empty.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A messaging counterpart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    /// Role or department label shown under the name.
    pub role: String,
    pub online: bool,
    pub avatar: String,
}

impl Contact {
    /// Placeholder for threads whose counterpart is no longer in the
    /// directory.
    pub fn unknown() -> Self {
        Self {
            id: String::new(),
            name: "Unknown".to_string(),
            role: String::new(),
            online: false,
            avatar: avatar_url("x"),
        }
    }
}

/// The slice of the employee directory that matters for messaging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub department: Option<String>,
    pub avatar: Option<String>,
}

/// Generated avatar for a given seed.
pub fn avatar_url(seed: &str) -> String {
    format!(
        "https://api.dicebear.com/7.x/thumbs/svg?seed={}",
        seed.replace(' ', "%20")
    )
}

/// Build the contact list from the employee directory.
///
/// Takes the first 20 entries; an empty directory falls back to
/// [`sample_contacts`].  The online flag is randomised, as the original mock
/// did.
pub fn contacts_from_employees(employees: &[Employee]) -> Vec<Contact> {
    if employees.is_empty() {
        return sample_contacts();
    }

    let mut rng = rand::thread_rng();
    employees
        .iter()
        .take(20)
        .map(|e| Contact {
            id: format!("emp-{}", e.id),
            name: e.name.clone(),
            role: e
                .department
                .clone()
                .unwrap_or_else(|| "Nhân sự".to_string()),
            online: rng.gen_bool(0.5),
            avatar: e
                .avatar
                .clone()
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| avatar_url(&e.name)),
        })
        .collect()
}

/// Static fallback directory used when no employees are available.
pub fn sample_contacts() -> Vec<Contact> {
    [
        ("c1", "Nguyễn Văn A", "PM", true),
        ("c2", "Trần Thị B", "Designer", false),
        ("c3", "Lê Văn C", "Backend", true),
        ("c4", "Phạm D", "Frontend", false),
    ]
    .into_iter()
    .map(|(id, name, role, online)| Contact {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        online,
        avatar: avatar_url(name),
    })
    .collect()
}
