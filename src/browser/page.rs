use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlMediaElement};

use crate::models::{NoticeId, Notification};
use crate::page::{AudioOutcome, Page};
use crate::store::{store_push_notice, store_remove_notice, NotificationStore};

/// The live document; notifications go through the store rendered by `NotificationList`
#[derive(Clone)]
pub struct BrowserPage {
    document: Document,
    notices: NotificationStore,
}

impl BrowserPage {
    pub fn new(document: Document, notices: NotificationStore) -> Self {
        Self { document, notices }
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl Page for BrowserPage {
    fn has_element(&self, element_id: &str) -> bool {
        self.document.get_element_by_id(element_id).is_some()
    }

    fn remove_class_in(&self, collection: &str, class: &str) {
        for element in dom_listeners::elements_by_class(&self.document, collection) {
            let _ = element.class_list().remove_1(class);
        }
    }

    fn add_class(&self, element_id: &str, class: &str) {
        if let Some(element) = self.document.get_element_by_id(element_id) {
            let _ = element.class_list().add_1(class);
        }
    }

    async fn play_audio(&self, element_id: &str) -> AudioOutcome {
        let media = match self.document.get_element_by_id(element_id) {
            Some(element) => match element.dyn_into::<HtmlMediaElement>() {
                Ok(media) => media,
                Err(_) => return AudioOutcome::Missing,
            },
            None => return AudioOutcome::Missing,
        };
        let promise = match media.play() {
            Ok(promise) => promise,
            Err(err) => return AudioOutcome::Failed(describe(&err)),
        };
        match JsFuture::from(promise).await {
            Ok(_) => AudioOutcome::Played,
            Err(err) => AudioOutcome::Failed(describe(&err)),
        }
    }

    fn show_notification(&self, notification: Notification) {
        store_push_notice(&self.notices, notification);
    }

    fn remove_notification(&self, id: NoticeId) -> bool {
        store_remove_notice(&self.notices, id)
    }

    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_pathname(path) {
            log::error!("[NAV] cannot go to {}: {}", path, describe(&err));
        }
    }
}
