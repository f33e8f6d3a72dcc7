//! Notification List Component
//!
//! Renders the notification store into the `#notifications` container.

use leptos::prelude::*;

use crate::store::{store_notices, NotificationStore};

/// One `div.notification-item.<label>` per live notification
#[component]
pub fn NotificationList(store: NotificationStore) -> impl IntoView {
    view! {
        <For
            each=move || store_notices(&store)
            key=|notice| notice.id
            children=move |notice| {
                let class = notice.css_class();
                view! { <div class=class>{notice.text}</div> }
            }
        />
    }
}
