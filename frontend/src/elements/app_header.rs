use std::rc::Rc;

use dominator::{clone, Dom, EventOptions, events, html};
use futures_signals::signal::{Signal, SignalExt};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::StorageEvent;

use shared::types::Page;

use crate::config::CONFIG;
use crate::constants::{ID_AUTH_SECTION, PROP_HREF, PROP_ROLE, TAG_LINK};
use crate::elements::icons::icon;
use crate::platform::Platform;
use crate::session::Session;
use crate::utils::{get_element_by_id, get_window};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NavMenu {
    Guest,
    User,
}

impl NavMenu {
    pub fn for_state(authenticated: bool) -> Self {
        if authenticated { NavMenu::User } else { NavMenu::Guest }
    }
}

pub fn nav_menu<P: Platform>(session: &Session<P>) -> impl Signal<Item=NavMenu> {
    session.authenticated_signal().map(NavMenu::for_state)
}

/// Swaps the `#authSection` placeholder for navigation that follows the
/// session, including changes made in other tabs.
pub fn update_auth_section<P: Platform>(session: &Rc<Session<P>>) {
    let placeholder = match get_element_by_id(ID_AUTH_SECTION) {
        Some(placeholder) => placeholder,
        None => return,
    };
    let parent = match placeholder.parent_node() {
        Some(parent) => parent,
        None => return,
    };
    let class_name = placeholder.class_name();
    dominator::replace_dom(&parent, &placeholder, auth_section(session.clone(), &class_name));
    watch_storage(session.clone());
}

pub fn auth_section<P: Platform>(session: Rc<Session<P>>, class_name: &str) -> Dom {
    html!("ul", {
        .attr("id", ID_AUTH_SECTION)
        .attr("class", class_name)
        .children_signal_vec(nav_menu(&session).map(clone!(session => move |menu| {
            match menu {
                NavMenu::User => user_menu(session.clone()),
                NavMenu::Guest => guest_links(),
            }
        })).to_signal_vec())
    })
}

/// A `None` key means the whole storage was cleared.
fn is_token_change(key: Option<&str>) -> bool {
    match key {
        Some(key) => key == CONFIG.token_key,
        None => true,
    }
}

fn watch_storage<P: Platform>(session: Rc<Session<P>>) {
    if let Some(w) = get_window() {
        let listener_callback = Closure::<dyn FnMut(_)>::new(move |e: StorageEvent| {
            if is_token_change(e.key().as_deref()) {
                log::info!("token changed in another tab");
                session.refresh();
            }
        });
        if let Err(err) = w.add_event_listener_with_callback("storage", listener_callback.as_ref().unchecked_ref()) {
            log::error!("add_event_listener: {:?}", err);
        }
        listener_callback.forget();
    }
}

fn nav_link(label: &str, icon_name: &str, page: Page) -> Dom {
    html!("li", {
        .class("nav-item")
        .child(html!(TAG_LINK, {
            .class("nav-link")
            .attr(PROP_HREF, page.path())
            .child(icon(icon_name))
            .text(label)
        }))
    })
}

fn guest_links() -> Vec<Dom> {
    vec![
        nav_link("Iniciar Sesión", "bi-box-arrow-in-right", Page::Login),
        nav_link("Registrarse", "bi-person-plus", Page::Register),
    ]
}

fn user_menu<P: Platform>(session: Rc<Session<P>>) -> Vec<Dom> {
    vec![html!("li", {
        .class(["nav-item", "dropdown"])
        .children([
            html!(TAG_LINK, {
                .class(["nav-link", "dropdown-toggle"])
                .attr(PROP_HREF, "#")
                .attr(PROP_ROLE, "button")
                .attr("data-bs-toggle", "dropdown")
                .child(icon("bi-person-circle"))
                .text("Usuario")
            }),
            html!("ul", {
                .class(["dropdown-menu", "dropdown-menu-end"])
                .children([
                    html!("li", {
                        .child(html!(TAG_LINK, {
                            .class("dropdown-item")
                            .attr(PROP_HREF, Page::Products.path())
                            .child(icon("bi-list-ul"))
                            .text("Mis Productos")
                        }))
                    }),
                    html!("li", {
                        .child(html!("hr", {
                            .class("dropdown-divider")
                        }))
                    }),
                    html!("li", {
                        .child(html!(TAG_LINK, {
                            .class(["dropdown-item", "text-danger"])
                            .attr(PROP_HREF, "#")
                            .child(icon("bi-box-arrow-right"))
                            .text("Cerrar Sesión")
                            .event_with_options(&EventOptions::preventable(), move |e: events::Click| {
                                e.prevent_default();
                                session.logout();
                            })
                        }))
                    }),
                ])
            }),
        ])
    })]
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;

    use crate::platform::fake::FakePlatform;

    use super::*;

    fn menu(session: &Session<FakePlatform>) -> Option<NavMenu> {
        let mut stream = Box::pin(nav_menu(session).to_stream());
        futures::executor::block_on(stream.next())
    }

    #[test]
    fn test_menu_follows_token() {
        let session = Session::new(Rc::new(FakePlatform::new(None)));
        assert_eq!(menu(&session), Some(NavMenu::Guest));

        session.store_token("jwt");
        assert_eq!(menu(&session), Some(NavMenu::User));

        session.clear_token();
        assert_eq!(menu(&session), Some(NavMenu::Guest));
    }

    #[test]
    fn test_storage_key_filter() {
        assert!(is_token_change(Some("token")));
        assert!(is_token_change(None));
        assert!(!is_token_change(Some("theme")));
        assert!(!is_token_change(Some("")));
    }

    #[test]
    fn test_menu_with_stored_token() {
        let session = Session::new(Rc::new(FakePlatform::new(Some("jwt"))));
        assert_eq!(menu(&session), Some(NavMenu::User));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use crate::platform::fake::FakePlatform;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn rendered(token: Option<&str>) -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let session = Session::new(Rc::new(FakePlatform::new(token)));
        dominator::append_dom(&root, auth_section(session, "navbar-nav"));
        root
    }

    #[wasm_bindgen_test]
    async fn guest_links_without_token() {
        let root = rendered(None);
        TimeoutFuture::new(0).await;
        assert!(root.query_selector("a[href='/login']").unwrap().is_some());
        assert!(root.query_selector("a[href='/register']").unwrap().is_some());
        assert!(root.query_selector(".dropdown-menu").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    async fn user_menu_with_token() {
        let root = rendered(Some("jwt"));
        TimeoutFuture::new(0).await;
        assert!(root.query_selector(".dropdown-menu a[href='/products']").unwrap().is_some());
        assert!(root.query_selector("a[href='/login']").unwrap().is_none());
    }
}
