use crate::components::*;
use crate::model::{
    ApiStatus, ClientConfig, Notification,
    api::HttpApi,
    controller::{Surface, UserListController},
    render::{CardAction, UsersView},
};
use gloo::timers::callback::Timeout;
use leptos::{logging::error, prelude::*, task::spawn_local};
use leptos_use::use_interval_fn;
use std::future::Future;

type PageController = UserListController<HttpApi, PageSurface>;

/// The page the controller drives, every part of it is a signal the view reads.
#[derive(Debug, Clone, Copy)]
pub struct PageSurface {
    pub status: RwSignal<ApiStatus>,
    pub loading: RwSignal<bool>,
    pub users: RwSignal<UsersView>,
    pub notification: RwSignal<Option<Notification>>,
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    notification_seq: StoredValue<u64>,
    notification_timeout: u32,
}

impl PageSurface {
    pub fn new(notification_timeout: u32) -> Self {
        Self {
            status: RwSignal::new(ApiStatus::Checking),
            loading: RwSignal::new(false),
            users: RwSignal::new(UsersView::Pending),
            notification: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            notification_seq: StoredValue::new(0),
            notification_timeout,
        }
    }
}

impl Surface for PageSurface {
    fn set_status(&self, status: ApiStatus) {
        self.status.set(status);
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn show_users(&self, view: UsersView) {
        self.users.set(view);
    }

    fn notify(&self, notification: Notification) {
        let seq = self.notification_seq.get_value() + 1;
        self.notification_seq.set_value(seq);
        self.notification.set(Some(notification));

        // only the newest notification gets to hide the toast
        let current = self.notification_seq;
        let slot = self.notification;
        Timeout::new(self.notification_timeout, move || {
            if current.try_get_value() == Some(seq) {
                slot.try_set(None);
            }
        })
        .forget();
    }

    fn reset_form(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        let window = web_sys::window()?;
        match window.prompt_with_message_and_default(message, default) {
            Ok(answer) => answer,
            Err(e) => {
                error!("Error opening prompt: {:?}", e);
                None
            }
        }
    }

    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window.confirm_with_message(message).unwrap_or_else(|e| {
            error!("Error opening confirm dialog: {:?}", e);
            false
        })
    }
}

fn spawn_with<F, Fut>(controller: StoredValue<PageController>, run: F)
where
    F: FnOnce(PageController) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    spawn_local(run(controller.get_value()));
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let config = ClientConfig::default();
    let surface = PageSurface::new(config.notification_timeout);
    let controller = StoredValue::new(UserListController::new(
        HttpApi::new(config.api_base_url.clone()),
        surface,
    ));

    let refresh = move || spawn_with(controller, |c| async move { c.refresh().await });
    Effect::new(move |_| refresh());
    let _ = use_interval_fn(refresh, config.refresh_interval);

    let submit = Callback::new(move |_: ()| {
        spawn_with(controller, |c| async move {
            let name = c.surface().name.get_untracked();
            let email = c.surface().email.get_untracked();
            c.create_user(&name, &email).await;
        })
    });

    let on_action = Callback::new(move |action: CardAction| {
        spawn_with(controller, move |c| async move {
            match action {
                CardAction::Edit(id) => c.edit_user(id).await,
                CardAction::Delete(id) => c.delete_user(id).await,
            }
        })
    });

    view! {
        <div class="container" id="users-page">
            <header class="header">
                <h1>"User Management"</h1>
                <StatusIndicator status=surface.status />
            </header>
            <section class="card">
                <h2>"Add New User"</h2>
                <UserForm name=surface.name email=surface.email submit />
            </section>
            <section class="card">
                <h2>"Users"</h2>
                <div
                    id="loading"
                    class="loading-indicator"
                    style:display=move || if surface.loading.get() { "block" } else { "none" }
                >
                    <p>"Loading users..."</p>
                </div>
                <UserList users=surface.users on_action />
            </section>
            <Toast notification=surface.notification />
        </div>
    }
}
