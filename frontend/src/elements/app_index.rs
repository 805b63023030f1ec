use std::rc::Rc;

use dominator::{Dom, html};
use futures_signals::signal::SignalExt;

use shared::types::Page;

use crate::constants::{PROP_HREF, TAG_DIV, TAG_LINK};
use crate::elements::app_header::{nav_menu, update_auth_section, NavMenu};
use crate::platform::Platform;
use crate::session::Session;
use crate::utils::set_title;

fn css_class(label: &str) -> String {
    format!("app-index__{label}")
}

/// Landing page. Mounts the header itself and never redirects.
pub fn index_page<P: Platform>(session: &Rc<Session<P>>) -> Dom {
    update_auth_section(session);
    set_title("Gestor de Productos");
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!("h1", {
                .text("Gestor de Productos")
            }),
            html!("p", {
                .class("lead")
                .text("Administra tus productos: crea, edita y elimina registros desde cualquier lugar.")
            }),
        ])
        .child_signal(nav_menu(session).map(|menu| Some(actions(menu))))
    })
}

fn actions(menu: NavMenu) -> Dom {
    let links = match menu {
        NavMenu::User => vec![button("Ver mis productos", Page::Products, "btn-primary")],
        NavMenu::Guest => vec![
            button("Iniciar Sesión", Page::Login, "btn-primary"),
            button("Registrarse", Page::Register, "btn-outline-primary"),
        ],
    };
    html!(TAG_DIV, {
        .class(css_class("actions"))
        .children(links)
    })
}

fn button(label: &str, page: Page, style: &str) -> Dom {
    html!(TAG_LINK, {
        .class(["btn", style, "me-2"])
        .attr(PROP_HREF, page.path())
        .text(label)
    })
}
