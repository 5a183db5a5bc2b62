use crate::model::types::*;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("User not found")]
    NotFound,
    #[error("Email already registered")]
    EmailTaken,
}

/// The server side user collection. Lives in memory, so it starts empty on
/// every boot.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    inner: Arc<RwLock<Users>>,
}

#[derive(Debug)]
struct Users {
    users: Vec<User>,
    next_id: UserId,
}

impl Default for Users {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }
}

impl Users {
    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        self.users
            .iter()
            .any(|user| user.email == email && Some(user.id) != except)
    }
}

impl UserStore {
    pub async fn list(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    pub async fn get(&self, id: UserId) -> Result<User, StoreError> {
        self.inner
            .read()
            .await
            .users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    pub async fn create(&self, draft: UserDraft) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.email_taken(&draft.email, None) {
            return Err(StoreError::EmailTaken);
        }
        let user = User {
            id: inner.next_id,
            name: draft.name,
            email: draft.email,
            created_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)),
        };
        inner.next_id += 1;
        inner.users.push(user.clone());
        Ok(user)
    }

    /// Applies the fields present in `patch`, the email must stay unique.
    pub async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or(StoreError::NotFound)?;
        if let Some(email) = &patch.email {
            if inner.email_taken(email, Some(id)) {
                return Err(StoreError::EmailTaken);
            }
        }

        let user = &mut inner.users[index];
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        Ok(user.clone())
    }

    pub async fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or(StoreError::NotFound)?;
        inner.users.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str) -> UserDraft {
        UserDraft {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn ids_increase_and_order_is_kept() {
        let store = UserStore::default();
        let ada = store.create(draft("Ada", "ada@example.com")).await.expect("ada");
        let grace = store
            .create(draft("Grace", "grace@example.com"))
            .await
            .expect("grace");
        assert_eq!((ada.id, grace.id), (1, 2));
        assert!(ada.created_at.is_some());

        store.delete(ada.id).await.expect("delete");
        let linus = store
            .create(draft("Linus", "linus@example.com"))
            .await
            .expect("linus");
        assert_eq!(linus.id, 3);

        let names: Vec<_> = store.list().await.into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["Grace", "Linus"]);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = UserStore::default();
        store.create(draft("Ada", "ada@example.com")).await.expect("ada");
        let err = store
            .create(draft("Impostor", "ada@example.com"))
            .await
            .expect_err("duplicate");
        assert_eq!(err, StoreError::EmailTaken);
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn partial_update() {
        let store = UserStore::default();
        let ada = store.create(draft("Ada", "ada@example.com")).await.expect("ada");
        store.create(draft("Grace", "grace@example.com")).await.expect("grace");

        let renamed = store
            .update(
                ada.id,
                UserPatch {
                    name: Some("Ada Lovelace".into()),
                    email: None,
                },
            )
            .await
            .expect("rename");
        assert_eq!(renamed.name, "Ada Lovelace");
        assert_eq!(renamed.email, "ada@example.com");
        assert_eq!(renamed.created_at, ada.created_at);

        // keeping your own email is fine, taking someone else's is not
        store
            .update(ada.id, UserPatch::from(draft("Ada", "ada@example.com")))
            .await
            .expect("same email");
        let err = store
            .update(
                ada.id,
                UserPatch {
                    name: None,
                    email: Some("grace@example.com".into()),
                },
            )
            .await
            .expect_err("taken");
        assert_eq!(err, StoreError::EmailTaken);
    }

    #[tokio::test]
    async fn missing_user() {
        let store = UserStore::default();
        assert_eq!(store.get(4).await, Err(StoreError::NotFound));
        assert_eq!(
            store.update(4, UserPatch::default()).await,
            Err(StoreError::NotFound)
        );
        assert_eq!(store.delete(4).await, Err(StoreError::NotFound));
    }
}
