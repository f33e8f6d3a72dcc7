//! Event Binder
//!
//! Click handlers for every configured group, change handler for the
//! session selector. Elements are looked up once; later insertions are not bound.

use std::future::Future;
use std::rc::Rc;

use dom_listeners::{elements_by_class, listen};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlSelectElement};

use super::{BrowserPage, TimeoutScheduler};
use crate::commands::{HttpTransport, Transport};
use crate::config::GroupConfig;
use crate::dispatcher::Dispatcher;
use crate::models::{ItemData, ATTR_ITEM_ID};
use crate::navigation::select_session;
use crate::page::{Page, Scheduler};

pub type BrowserDispatcher = Dispatcher<HttpTransport, BrowserPage, TimeoutScheduler>;

/// Work for one click: None when the element carries no `data-itemid`.
/// Spawned with wasm-bindgen-futures so clicks work whether or not the
/// notification list was mounted.
pub fn click_task<T, P, S>(
    dispatcher: &Rc<Dispatcher<T, P, S>>,
    group: &Rc<GroupConfig>,
    item: Option<ItemData>,
) -> Option<impl Future<Output = ()> + 'static>
where
    T: Transport + 'static,
    P: Page + Clone + 'static,
    S: Scheduler + 'static,
{
    let Some(item) = item else {
        log::warn!("[BIND] .{} element without {}", group.class_name, ATTR_ITEM_ID);
        return None;
    };
    let dispatcher = dispatcher.clone();
    let group = group.clone();
    Some(async move {
        dispatcher.handle(&group, &item).await;
    })
}

/// Bind every element of every group; returns how many were bound
pub fn bind_groups(doc: &Document, dispatcher: &Rc<BrowserDispatcher>) -> usize {
    let mut bound = 0;
    for group in &dispatcher.config().groups {
        let group = Rc::new(group.clone());
        let elements = elements_by_class(doc, &group.class_name);
        log::debug!("[BIND] .{}: {} elements", group.class_name, elements.len());

        for element in elements {
            let click_dispatcher = dispatcher.clone();
            let click_group = group.clone();
            let source = element.clone();
            let result = listen(&element, "click", move |_| {
                let item = ItemData::from_attributes(|name| source.get_attribute(name));
                if let Some(task) = click_task(&click_dispatcher, &click_group, item) {
                    spawn_local(task);
                }
            });
            match result {
                Ok(()) => bound += 1,
                Err(err) => log::error!("[BIND] .{}: {:?}", group.class_name, err),
            }
        }
    }
    bound
}

/// Navigate on session change; false when the page has no selector
pub fn bind_session_select(doc: &Document, dispatcher: &Rc<BrowserDispatcher>) -> bool {
    let config = dispatcher.config();
    let Some(select) = doc.get_element_by_id(&config.session_select_id) else {
        return false;
    };

    let page = dispatcher.page().clone();
    let base = config.sessions_path.clone();
    let source = select.clone();
    let result = listen(&select, "change", move |_| {
        let value = match source.dyn_ref::<HtmlSelectElement>() {
            Some(select) => select.value(),
            None => source.get_attribute("value").unwrap_or_default(),
        };
        select_session(&page, &base, &value);
    });
    if let Err(err) = &result {
        log::error!("[BIND] #{}: {:?}", config.session_select_id, err);
    }
    result.is_ok()
}
