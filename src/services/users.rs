//! Seeded user and company directory.
//!
//! Fixture companies and accounts are loaded from a YAML seed file at
//! startup. Passwords are salted and hashed at load time so plaintext dev
//! passwords never live in memory past parsing.

use std::collections::HashMap;
use std::path::Path;

use access::{Role, UserRef};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to read seed file {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("invalid seed file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid email in seed: {0:?}")]
    InvalidEmail(String),
    #[error("duplicate email in seed: {0}")]
    DuplicateEmail(String),
    #[error("user {email} references unknown company {company:?}")]
    UnknownCompany { email: String, company: String },
    #[error("user {0} has an empty password")]
    EmptyPassword(String),
    #[error("invalid email or password")]
    InvalidCredentials,
}

// =============================================================================
// SEED FORMAT
// =============================================================================

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    companies: Vec<SeedCompany>,
    #[serde(default)]
    users: Vec<SeedUser>,
}

#[derive(Debug, Deserialize)]
struct SeedCompany {
    name: String,
}

#[derive(Debug, Deserialize)]
struct SeedUser {
    name: String,
    email: String,
    password: String,
    role: Role,
    company: Option<String>,
}

// =============================================================================
// RECORDS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone)]
struct PasswordHash {
    salt: [u8; 16],
    digest: [u8; 32],
}

impl PasswordHash {
    fn new(password: &str) -> Self {
        let salt: [u8; 16] = rand::rng().random();
        Self { salt, digest: hash_password(&salt, password) }
    }

    fn verify(&self, password: &str) -> bool {
        let candidate = hash_password(&self.salt, password);
        // Fixed-time comparison over the whole digest.
        candidate
            .iter()
            .zip(self.digest.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

fn hash_password(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

/// Account as known to the server.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub company_id: Option<Uuid>,
    password: PasswordHash,
}

impl UserRecord {
    /// Identity projection handed to clients.
    #[must_use]
    pub fn to_user_ref(&self) -> UserRef {
        UserRef {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            company_id: self.company_id.map(|id| id.to_string()),
        }
    }
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

// =============================================================================
// DIRECTORY
// =============================================================================

#[derive(Debug, Default)]
pub struct UserDirectory {
    companies: Vec<Company>,
    users: Vec<UserRecord>,
    by_email: HashMap<String, usize>,
    by_id: HashMap<Uuid, usize>,
}

impl UserDirectory {
    /// Load and validate a seed file from disk.
    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| DirectoryError::Io { path: path.display().to_string(), source })?;
        Self::from_yaml(&raw)
    }

    /// Parse and validate seed YAML.
    pub fn from_yaml(raw: &str) -> Result<Self, DirectoryError> {
        let seed: SeedFile = serde_yaml::from_str(raw)?;
        let mut directory = Self::default();

        let mut company_ids = HashMap::new();
        for company in seed.companies {
            let id = Uuid::new_v4();
            company_ids.insert(company.name.clone(), id);
            directory.companies.push(Company { id, name: company.name });
        }

        for user in seed.users {
            let email = normalize_email(&user.email).ok_or_else(|| DirectoryError::InvalidEmail(user.email.clone()))?;
            if directory.by_email.contains_key(&email) {
                return Err(DirectoryError::DuplicateEmail(email));
            }
            if user.password.is_empty() {
                return Err(DirectoryError::EmptyPassword(email));
            }
            let company_id = match user.company {
                Some(name) => Some(
                    *company_ids
                        .get(&name)
                        .ok_or_else(|| DirectoryError::UnknownCompany { email: email.clone(), company: name.clone() })?,
                ),
                None => None,
            };
            let record = UserRecord {
                id: Uuid::new_v4(),
                name: user.name,
                email: email.clone(),
                role: user.role,
                company_id,
                password: PasswordHash::new(&user.password),
            };
            let index = directory.users.len();
            directory.by_email.insert(email, index);
            directory.by_id.insert(record.id, index);
            directory.users.push(record);
        }

        Ok(directory)
    }

    /// Check credentials and return the matching account.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<&UserRecord, DirectoryError> {
        let email = normalize_email(email).ok_or(DirectoryError::InvalidCredentials)?;
        let user = self
            .by_email
            .get(&email)
            .map(|&i| &self.users[i])
            .ok_or(DirectoryError::InvalidCredentials)?;
        if !user.password.verify(password) {
            return Err(DirectoryError::InvalidCredentials);
        }
        Ok(user)
    }

    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&UserRecord> {
        self.by_id.get(&id).map(|&i| &self.users[i])
    }

    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    #[must_use]
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Number of accounts attached to `company_id`.
    #[must_use]
    pub fn company_user_count(&self, company_id: Uuid) -> usize {
        self.users.iter().filter(|u| u.company_id == Some(company_id)).count()
    }
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
