use std::rc::Rc;

use dominator::{clone, Dom, EventOptions, events, html};
use futures_signals::map_ref;
use futures_signals::signal::SignalExt;
use wasm_bindgen_futures::spawn_local;

use crate::constants::{ID_PRODUCT_FORM, PROP_DISABLED, PROP_ROLE, PROP_TYPE, TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::elements::app_message::Messages;
use crate::elements::form_field::form_field;
use crate::platform::Platform;
use crate::products::products_list::products_list;
use crate::products::products_state::ProductsPage;
use crate::session::Session;
use crate::utils::set_title;

fn css_class(label: &str) -> String {
    format!("app-products__{label}")
}

/// Entry for `/products`. Without a token the visitor is sent to the login
/// page and nothing is rendered or fetched.
pub fn products_page<P: Platform>(session: &Rc<Session<P>>) -> Option<Dom> {
    if !session.require_auth() {
        return None;
    }
    let page = ProductsPage::new(session.clone());
    spawn_local(clone!(page => async move {
        page.load().await;
    }));
    Some(render(page))
}

fn render<P: Platform>(page: Rc<ProductsPage<P>>) -> Dom {
    set_title("Mis Productos");
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!("h2", {
                .text("Mis Productos")
            }),
            Messages::render(page.messages.clone()),
            product_form(page.clone()),
            html!(TAG_DIV, {
                .attr("id", "productsContainer")
                .child_signal(products_list(page.clone()))
            }),
        ])
    })
}

fn product_form<P: Platform>(page: Rc<ProductsPage<P>>) -> Dom {
    html!(TAG_DIV, {
        .class(["card", "mb-4"])
        .attr("id", ID_PRODUCT_FORM)
        .children([
            html!("h5", {
                .class("card-header")
                .text_signal(page.mode_signal().map(|mode| mode.title()))
            }),
            html!("form", {
                .class("card-body")
                .attr("novalidate", "")
                .children([
                    form_field("Nombre", "nombre", "text", page.name.clone()),
                    form_field("Tipo", "tipo", "text", page.kind.clone()),
                    html!(TAG_DIV, {
                        .class(["d-flex", "gap-2"])
                        .children([
                            submit_button(page.clone()),
                            cancel_button(page.clone()),
                        ])
                    }),
                ])
            }),
        ])
    })
}

fn submit_button<P: Platform>(page: Rc<ProductsPage<P>>) -> Dom {
    let label = map_ref! {
        let busy = page.busy.signal(),
        let mode = page.mode_signal(),
        let idle = page.submit_label.signal() =>
        if *busy { mode.busy_label() } else { *idle }
    };
    html!(TAG_BUTTON, {
        .attr(PROP_TYPE, "submit")
        .class(["btn", "btn-primary"])
        .prop_signal(PROP_DISABLED, page.busy.signal())
        .child(html!(TAG_SPAN, {
            .class(["spinner-border", "spinner-border-sm", "me-2"])
            .attr(PROP_ROLE, "status")
            .visible_signal(page.busy.signal())
        }))
        .text_signal(label)
        .event_with_options(&EventOptions::preventable(), clone!(page => move |e: events::Click| {
            e.prevent_default();
            spawn_local(clone!(page => async move {
                page.submit().await;
            }));
        }))
    })
}

fn cancel_button<P: Platform>(page: Rc<ProductsPage<P>>) -> Dom {
    html!(TAG_BUTTON, {
        .attr(PROP_TYPE, "button")
        .class(["btn", "btn-secondary"])
        .text("Cancelar")
        .visible_signal(page.editing.signal_ref(Option::is_some))
        .event(clone!(page => move |_: events::Click| {
            page.cancel_edit();
        }))
    })
}

#[cfg(test)]
mod tests {
    use shared::types::Page;

    use crate::platform::fake::FakePlatform;

    use super::*;

    #[test]
    fn test_guard_without_token() {
        let session = Session::new(Rc::new(FakePlatform::new(None)));

        assert!(products_page(&session).is_none());
        assert_eq!(session.platform().navigations(), vec![Page::Login]);
        assert_eq!(session.platform().request_count(), 0);
    }
}
