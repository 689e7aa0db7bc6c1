use super::*;

const SEED: &str = r"
companies:
  - name: Acme Holdings
  - name: Northwind Trading
users:
  - name: Ada Admin
    email: Admin@Ledgerly.dev
    password: admin123
    role: ADMIN
  - name: Sam Super
    email: super@ledgerly.dev
    password: super123
    role: SUPERUSER
    company: Acme Holdings
  - name: Uma User
    email: user@ledgerly.dev
    password: user123
    role: USER
    company: Acme Holdings
";

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_lowercases_and_trims() {
    assert_eq!(normalize_email("  Ada@Example.COM "), Some("ada@example.com".to_owned()));
}

#[test]
fn normalize_email_rejects_malformed() {
    for raw in ["", "ada", "@example.com", "ada@", "a@b@c"] {
        assert_eq!(normalize_email(raw), None, "{raw}");
    }
}

// =============================================================================
// from_yaml
// =============================================================================

#[test]
fn from_yaml_loads_companies_and_users() {
    let dir = UserDirectory::from_yaml(SEED).unwrap();
    assert_eq!(dir.companies().len(), 2);
    assert_eq!(dir.users().len(), 3);
    assert_eq!(dir.users()[0].email, "admin@ledgerly.dev");
    assert_eq!(dir.users()[0].company_id, None);
}

#[test]
fn from_yaml_links_users_to_companies() {
    let dir = UserDirectory::from_yaml(SEED).unwrap();
    let acme = dir.companies().iter().find(|c| c.name == "Acme Holdings").unwrap();
    let northwind = dir.companies().iter().find(|c| c.name == "Northwind Trading").unwrap();
    assert_eq!(dir.company_user_count(acme.id), 2);
    assert_eq!(dir.company_user_count(northwind.id), 0);
}

#[test]
fn from_yaml_rejects_unknown_company() {
    let raw = "users:\n  - {name: A, email: a@b.com, password: x, role: USER, company: Nope}\n";
    assert!(matches!(UserDirectory::from_yaml(raw), Err(DirectoryError::UnknownCompany { .. })));
}

#[test]
fn from_yaml_rejects_duplicate_email() {
    let raw = "users:\n  - {name: A, email: a@b.com, password: x, role: USER}\n  - {name: B, email: A@B.com, password: y, role: ADMIN}\n";
    assert!(matches!(UserDirectory::from_yaml(raw), Err(DirectoryError::DuplicateEmail(e)) if e == "a@b.com"));
}

#[test]
fn from_yaml_rejects_invalid_role() {
    let raw = "users:\n  - {name: A, email: a@b.com, password: x, role: OWNER}\n";
    assert!(matches!(UserDirectory::from_yaml(raw), Err(DirectoryError::Parse(_))));
}

#[test]
fn from_yaml_rejects_empty_password() {
    let raw = "users:\n  - {name: A, email: a@b.com, password: '', role: USER}\n";
    assert!(matches!(UserDirectory::from_yaml(raw), Err(DirectoryError::EmptyPassword(_))));
}

#[test]
fn from_yaml_accepts_empty_document_sections() {
    let dir = UserDirectory::from_yaml("companies: []\n").unwrap();
    assert!(dir.users().is_empty());
}

// =============================================================================
// authenticate
// =============================================================================

#[test]
fn authenticate_accepts_correct_password_any_email_case() {
    let dir = UserDirectory::from_yaml(SEED).unwrap();
    let user = dir.authenticate(" SUPER@ledgerly.dev ", "super123").unwrap();
    assert_eq!(user.role, Role::Superuser);
}

#[test]
fn authenticate_rejects_wrong_password() {
    let dir = UserDirectory::from_yaml(SEED).unwrap();
    assert!(matches!(dir.authenticate("user@ledgerly.dev", "admin123"), Err(DirectoryError::InvalidCredentials)));
}

#[test]
fn authenticate_rejects_unknown_email() {
    let dir = UserDirectory::from_yaml(SEED).unwrap();
    assert!(matches!(dir.authenticate("ghost@ledgerly.dev", "x"), Err(DirectoryError::InvalidCredentials)));
    assert!(matches!(dir.authenticate("not-an-email", "x"), Err(DirectoryError::InvalidCredentials)));
}

#[test]
fn get_finds_user_by_id() {
    let dir = UserDirectory::from_yaml(SEED).unwrap();
    let id = dir.users()[2].id;
    assert_eq!(dir.get(id).map(|u| u.name.as_str()), Some("Uma User"));
    assert!(dir.get(Uuid::new_v4()).is_none());
}

#[test]
fn user_ref_carries_string_ids() {
    let dir = UserDirectory::from_yaml(SEED).unwrap();
    let user = &dir.users()[1];
    let user_ref = user.to_user_ref();
    assert_eq!(user_ref.id, user.id.to_string());
    assert_eq!(user_ref.company_id, user.company_id.map(|id| id.to_string()));
}

#[test]
fn same_password_hashes_differently_per_user() {
    let a = PasswordHash::new("secret");
    let b = PasswordHash::new("secret");
    assert_ne!(a.digest, b.digest);
    assert!(a.verify("secret") && b.verify("secret"));
    assert!(!a.verify("Secret"));
}
