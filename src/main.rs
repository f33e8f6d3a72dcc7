//! Pepper Remote Console Frontend Entry Point

mod app;
mod browser;
mod commands;
mod components;
mod config;
mod dispatcher;
mod error;
mod feedback;
mod models;
mod navigation;
mod page;
mod store;

#[cfg(test)]
mod testing;

fn main() {
    console_error_panic_hook::set_once();
    let started = dom_listeners::on_dom_ready(|| {
        if let Err(err) = app::start() {
            log::error!("[APP] start failed: {:?}", err);
        }
    });
    if let Err(err) = started {
        web_sys::console::error_1(&err);
    }
}
