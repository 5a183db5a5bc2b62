use crate::model::api::UserApi;
use crate::model::render::{self, UsersView};
use crate::model::{ApiStatus, Notification, User, UserDraft, UserId};
use leptos::logging::{error, log};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Everything on the page the controller touches.
pub trait Surface {
    fn set_status(&self, status: ApiStatus);
    fn set_loading(&self, loading: bool);
    fn show_users(&self, view: UsersView);
    fn notify(&self, notification: Notification);
    fn reset_form(&self);
    /// `None` when the user dismissed the dialog.
    fn prompt(&self, message: &str, default: &str) -> Option<String>;
    fn confirm(&self, message: &str) -> bool;
}

/// Keeps the cached user list in sync with the api and the page in sync with
/// the list.
///
/// Clones share the same list. Operations are not serialized: if two of them
/// are in flight the one that resolves last decides what the list looks like.
#[derive(Clone)]
pub struct UserListController<A, S> {
    api: A,
    surface: S,
    users: Arc<Mutex<Vec<User>>>,
}

/// Hides the loading indicator when dropped, whichever way the load ends.
struct Loading<'a, S: Surface>(&'a S);

impl<'a, S: Surface> Loading<'a, S> {
    fn start(surface: &'a S) -> Self {
        surface.set_loading(true);
        Self(surface)
    }
}

impl<S: Surface> Drop for Loading<'_, S> {
    fn drop(&mut self) {
        self.0.set_loading(false);
    }
}

impl<A: UserApi, S: Surface> UserListController<A, S> {
    pub fn new(api: A, surface: S) -> Self {
        Self {
            api,
            surface,
            users: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Snapshot of the cached list.
    pub fn users(&self) -> Vec<User> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn find(&self, id: UserId) -> Option<User> {
        self.lock().iter().find(|user| user.id == id).cloned()
    }

    pub async fn check_health(&self) {
        self.surface.set_status(ApiStatus::Checking);
        match self.api.health().await {
            Ok(health) => self.surface.set_status(ApiStatus::Online(health.status)),
            Err(e) => {
                error!("API health check failed: {}", e);
                self.surface.set_status(ApiStatus::Offline);
            }
        }
    }

    /// Replaces the cached list with whatever the api has now.
    pub async fn load_users(&self) {
        let _loading = Loading::start(&self.surface);
        match self.api.list_users().await {
            Ok(users) => {
                *self.lock() = users;
                self.render();
            }
            Err(e) => {
                error!("Error loading users: {}", e);
                self.surface
                    .notify(Notification::error(render::LOAD_FAILED_MESSAGE));
                self.surface.show_users(UsersView::LoadFailed);
            }
        }
    }

    pub async fn create_user(&self, name: &str, email: &str) {
        let Some(draft) = UserDraft::parse(name, email) else {
            self.surface
                .notify(Notification::error("Please fill in all fields"));
            return;
        };
        match self.api.create_user(&draft).await {
            Ok(user) => {
                log!("created user {}", user.id);
                self.lock().push(user);
                self.render();
                self.surface.reset_form();
                self.surface
                    .notify(Notification::success("User added successfully!"));
            }
            Err(e) => {
                error!("Error adding user: {}", e);
                self.surface
                    .notify(Notification::error(e.detail_or("Failed to add user")));
            }
        }
    }

    pub async fn edit_user(&self, id: UserId) {
        let Some(user) = self.find(id) else {
            return;
        };
        let Some(name) = self.surface.prompt("Enter new name:", &user.name) else {
            return;
        };
        let Some(email) = self.surface.prompt("Enter new email:", &user.email) else {
            return;
        };
        let Some(draft) = UserDraft::parse(&name, &email) else {
            self.surface
                .notify(Notification::error("Name and email cannot be empty"));
            return;
        };

        match self.api.update_user(id, &draft).await {
            Ok(updated) => {
                {
                    let mut users = self.lock();
                    // a refresh may have dropped the record while the request was out
                    if let Some(slot) = users.iter_mut().find(|user| user.id == id) {
                        *slot = updated;
                    }
                }
                self.render();
                self.surface
                    .notify(Notification::success("User updated successfully!"));
            }
            Err(e) => {
                error!("Error updating user: {}", e);
                self.surface
                    .notify(Notification::error(e.detail_or("Failed to update user")));
            }
        }
    }

    pub async fn delete_user(&self, id: UserId) {
        let Some(user) = self.find(id) else {
            return;
        };
        if !self
            .surface
            .confirm(&format!("Are you sure you want to delete {}?", user.name))
        {
            return;
        }

        match self.api.delete_user(id).await {
            Ok(()) => {
                self.lock().retain(|user| user.id != id);
                self.render();
                self.surface
                    .notify(Notification::success("User deleted successfully!"));
            }
            Err(e) => {
                error!("Error deleting user: {}", e);
                self.surface
                    .notify(Notification::error(e.detail_or("Failed to delete user")));
            }
        }
    }

    /// Health check and full reload, what the refresh timer runs.
    pub async fn refresh(&self) {
        futures::join!(self.check_health(), self.load_users());
    }

    pub fn render(&self) {
        let view = render::render(&self.lock());
        self.surface.show_users(view);
    }
}
