use crate::model::render::{
    CardAction, LOAD_FAILED_MESSAGE, NO_USERS_MESSAGE, UserCard, UsersView,
};
use leptos::{either::EitherOf4, prelude::*};

#[component]
pub fn UserList(
    #[prop(into)] users: Signal<UsersView>,
    on_action: Callback<CardAction>,
) -> impl IntoView {
    let cards = move || {
        users.with(|users| match users {
            UsersView::Cards(cards) => cards.clone(),
            _ => Vec::new(),
        })
    };

    view! {
        <div id="usersContainer" class="users-container">
            {move || {
                users.with(|users| match users {
                    UsersView::Pending => EitherOf4::A(()),
                    UsersView::Empty => {
                        EitherOf4::B(view! { <div class="no-users">{NO_USERS_MESSAGE}</div> })
                    }
                    UsersView::LoadFailed => {
                        EitherOf4::C(view! { <div class="no-users">{LOAD_FAILED_MESSAGE}</div> })
                    }
                    UsersView::Cards(_) => EitherOf4::D(()),
                })
            }}
            // keyed on the whole card so an edited record is redrawn
            <For
                each=cards
                key=|card| card.clone()
                children=move |card| view! { <UserEntry card on_action /> }
            />
        </div>
    }
}

#[component]
pub fn UserEntry(card: UserCard, on_action: Callback<CardAction>) -> impl IntoView {
    let id = card.id;
    view! {
        <div class="user-card" data-user-id=id.to_string()>
            <div class="user-info">
                <h3>{card.name}</h3>
                <p>
                    <strong>"Email:"</strong>
                    " "
                    {card.email}
                </p>
                <small>
                    <strong>"Created:"</strong>
                    " "
                    {card.created}
                </small>
            </div>
            <div class="user-actions">
                <button class="btn btn-edit" on:click=move |_| on_action.run(CardAction::Edit(id))>
                    "Edit"
                </button>
                <button
                    class="btn btn-danger"
                    on:click=move |_| on_action.run(CardAction::Delete(id))
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn entry_html(card: UserCard) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let on_action = Callback::new(|_: CardAction| {});
            view! { <UserEntry card on_action /> }.to_html()
        })
    }

    #[test]
    fn entry_shows_the_record() {
        let html = entry_html(UserCard {
            id: 4,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            created: "Jan 5, 2024, 03:04 PM".into(),
        });
        assert!(html.contains(r#"data-user-id="4""#));
        assert!(html.contains("Ada"));
        assert!(html.contains("ada@example.com"));
        assert!(html.contains("Jan 5, 2024, 03:04 PM"));
        assert!(html.contains(">Edit<"));
        assert!(html.contains(">Delete<"));
    }

    #[test]
    fn user_text_is_escaped() {
        let html = entry_html(UserCard {
            id: 1,
            name: "<script>alert(1)</script>".into(),
            email: "evil@example.com&<b>".into(),
            created: "N/A".into(),
        });
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("evil@example.com&amp;&lt;b&gt;"));
    }
}
