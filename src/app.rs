//! Remote Console App
//!
//! Wires configuration, logging, the notification list and the event
//! binder onto the server-rendered page.

use std::rc::Rc;

use leptos::prelude::*;
use log::LevelFilter;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::browser::{bind_groups, bind_session_select, BrowserPage, TimeoutScheduler};
use crate::commands::HttpTransport;
use crate::components::NotificationList;
use crate::config::{UiConfig, CONFIG_ELEMENT_ID};
use crate::dispatcher::Dispatcher;
use crate::store::{new_notification_store, NotificationStore};

pub fn start() -> Result<(), JsValue> {
    if console_logger::init(LevelFilter::Debug).is_err() {
        log::warn!("[APP] logger already installed");
    }

    let doc = dom_listeners::document()?;
    let config = load_config(&doc);
    match console_logger::parse_level(&config.log_level) {
        Some(level) => console_logger::set_level(level),
        None => log::warn!("[APP] unknown log level {:?}", config.log_level),
    }

    let notices = new_notification_store();
    mount_notifications(&doc, &config.notifications_id, notices);

    let page = BrowserPage::new(doc.clone(), notices);
    let dispatcher = Rc::new(Dispatcher::new(config, HttpTransport, page, TimeoutScheduler));

    let bound = bind_groups(&doc, &dispatcher);
    let has_select = bind_session_select(&doc, &dispatcher);
    log::info!("[APP] bound {} items, session selector: {}", bound, has_select);
    Ok(())
}

fn load_config(doc: &Document) -> UiConfig {
    let raw = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    UiConfig::resolve(raw.as_deref())
}

fn mount_notifications(doc: &Document, container_id: &str, store: NotificationStore) {
    let container = doc
        .get_element_by_id(container_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let Some(container) = container else {
        log::warn!("[APP] no #{} container, notifications stay hidden", container_id);
        return;
    };
    leptos::mount::mount_to(container, move || view! { <NotificationList store=store /> }).forget();
}
