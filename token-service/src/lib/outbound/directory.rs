use async_trait::async_trait;
use credentials::PasswordHasher;

use crate::auth::errors::DirectoryError;
use crate::auth::models::User;
use crate::auth::models::UserId;
use crate::auth::ports::UserDirectory;

/// Fixed in-memory user directory.
///
/// Population is a provisioning concern; this adapter only resolves.
/// The reference seed is a single active account so the service is
/// exercisable out of the box.
pub struct InMemoryUserDirectory {
    users: Vec<User>,
}

impl InMemoryUserDirectory {
    /// Directory holding the given users.
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Directory seeded with the reference account
    /// `testuser` / `Password123!`.
    pub fn seeded(hasher: &PasswordHasher) -> Self {
        let digest = hasher.hash("Password123!");

        Self::new(vec![User {
            id: UserId::new(),
            username: "testuser".to_string(),
            password_hash: digest.hash,
            password_salt: digest.salt,
            active: true,
        }])
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DirectoryError> {
        Ok(self
            .users
            .iter()
            .find(|user| user.username.eq_ignore_ascii_case(username))
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DirectoryError> {
        Ok(self.users.iter().find(|user| user.id == *id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_username_is_case_insensitive() {
        let directory = InMemoryUserDirectory::seeded(&PasswordHasher::new());

        let user = directory
            .find_by_username("TestUser")
            .await
            .unwrap()
            .expect("User not found");
        assert_eq!(user.username, "testuser");
        assert!(user.active);
    }

    #[tokio::test]
    async fn test_find_by_username_unknown() {
        let directory = InMemoryUserDirectory::seeded(&PasswordHasher::new());
        assert!(directory
            .find_by_username("nobody")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let directory = InMemoryUserDirectory::seeded(&PasswordHasher::new());

        let user = directory
            .find_by_username("testuser")
            .await
            .unwrap()
            .unwrap();

        let by_id = directory
            .find_by_id(&user.id)
            .await
            .unwrap()
            .expect("User not found");
        assert_eq!(by_id.username, "testuser");

        assert!(directory.find_by_id(&UserId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_seeded_password_verifies() {
        let hasher = PasswordHasher::new();
        let directory = InMemoryUserDirectory::seeded(&hasher);

        let user = directory
            .find_by_username("testuser")
            .await
            .unwrap()
            .unwrap();

        assert!(hasher
            .verify("Password123!", &user.password_hash, &user.password_salt)
            .unwrap());
    }
}
