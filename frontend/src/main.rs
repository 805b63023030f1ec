use std::rc::Rc;

use shared::types::Page;

use crate::elements::app_header::update_auth_section;
use crate::elements::app_index::index_page;
use crate::elements::app_login::login_page;
use crate::elements::app_register::register_page;
use crate::platform::WebPlatform;
use crate::products::app_products::products_page;
use crate::session::Session;
use crate::utils::{get_mount_point, get_pathname};

mod api;
mod config;
mod connect_fetch;
mod constants;
mod elements;
mod error;
mod platform;
mod products;
mod session;
mod types;
mod utils;

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let session = Session::new(Rc::new(WebPlatform));
    let pathname = get_pathname();
    let page = Page::from_path(&pathname);
    log::info!("mount {} as {:?}", pathname, page);

    // the landing page mounts the header itself
    if page != Some(Page::Index) {
        update_auth_section(&session);
    }

    let view = match page {
        Some(Page::Index) => Some(index_page(&session)),
        Some(Page::Login) => login_page(&session),
        Some(Page::Register) => register_page(&session),
        Some(Page::Products) => products_page(&session),
        None => None,
    };

    if let (Some(view), Some(root)) = (view, get_mount_point()) {
        dominator::append_dom(&root, view);
    }
}
