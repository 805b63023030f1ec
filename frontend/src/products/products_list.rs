use std::rc::Rc;

use dominator::{clone, Dom, events, html};
use futures_signals::map_ref;
use futures_signals::signal::{Signal, SignalExt};
use wasm_bindgen_futures::spawn_local;

use shared::types::Product;
use shared::utils::format_date;

use crate::constants::{ID_PRODUCT_FORM, MSG_CONNECTION, PROP_ROLE, PROP_TYPE, TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::elements::icons::icon;
use crate::platform::Platform;
use crate::products::products_state::{ListStatus, ProductsPage};
use crate::utils::{local_offset_minutes, scroll_into_view};

fn css_class(label: &str) -> String {
    format!("app-products__{label}")
}

pub fn products_list<P: Platform>(page: Rc<ProductsPage<P>>) -> impl Signal<Item=Option<Dom>> {
    map_ref! {
        let status = page.status.signal_cloned(),
        let products = page.products.signal_cloned() => (status.clone(), products.clone())
    }.map(move |(status, products)| Some(match status {
        ListStatus::Loading => loading(),
        ListStatus::Offline => placeholder("bi-wifi-off", MSG_CONNECTION, "No se pudo conectar con el servidor"),
        ListStatus::Failed(text) => placeholder("bi-exclamation-triangle", "Error al cargar productos", &text),
        ListStatus::Ready if products.is_empty() => {
            placeholder("bi-inbox", "No tienes productos", "Agrega tu primer producto usando el formulario.")
        }
        ListStatus::Ready => html!(TAG_DIV, {
            .class(css_class("list"))
            .children(products.iter().map(|product| {
                product_card(product, edit_handler(page.clone()), delete_handler(page.clone()))
            }))
        }),
    }))
}

fn edit_handler<P: Platform>(page: Rc<ProductsPage<P>>) -> impl Fn(&str) + 'static {
    move |id: &str| {
        if page.begin_edit(id) {
            scroll_into_view(ID_PRODUCT_FORM);
        }
    }
}

fn delete_handler<P: Platform>(page: Rc<ProductsPage<P>>) -> impl Fn(&str) + 'static {
    move |id: &str| {
        let id = id.to_string();
        spawn_local(clone!(page => async move {
            page.delete(&id).await;
        }));
    }
}

/// One product. Name and type go in as text nodes.
pub fn product_card<E, D>(product: &Product, on_edit: E, on_delete: D) -> Dom
    where E: Fn(&str) + 'static, D: Fn(&str) + 'static {
    let edit_id = product.id.clone();
    let delete_id = product.id.clone();
    html!(TAG_DIV, {
        .class(["card", "mb-3"])
        .class(css_class("card"))
        .attr("data-id", &product.id)
        .child(html!(TAG_DIV, {
            .class("card-body")
            .children([
                html!(TAG_DIV, {
                    .class(["d-flex", "justify-content-between", "align-items-start"])
                    .children([
                        html!(TAG_DIV, {
                            .children([
                                html!("h5", {
                                    .class("card-title")
                                    .text(&product.name)
                                }),
                                html!(TAG_SPAN, {
                                    .class(["badge", "bg-primary"])
                                    .text(&product.kind)
                                }),
                            ])
                        }),
                        html!(TAG_DIV, {
                            .class(css_class("actions"))
                            .children([
                                html!(TAG_BUTTON, {
                                    .attr(PROP_TYPE, "button")
                                    .class(["btn", "btn-sm", "btn-outline-primary", "me-1"])
                                    .child(icon("bi-pencil"))
                                    .text("Editar")
                                    .event(move |_: events::Click| on_edit(&edit_id))
                                }),
                                html!(TAG_BUTTON, {
                                    .attr(PROP_TYPE, "button")
                                    .class(["btn", "btn-sm", "btn-outline-danger"])
                                    .child(icon("bi-trash"))
                                    .text("Eliminar")
                                    .event(move |_: events::Click| on_delete(&delete_id))
                                }),
                            ])
                        }),
                    ])
                }),
                html!("small", {
                    .class(["text-muted", "d-block", "mt-2"])
                    .text("Creado: ")
                    .text(&display_date(&product.created_at))
                }),
                html!("small", {
                    .class(["text-muted", "d-block"])
                    .text("Actualizado: ")
                    .text(&display_date(&product.updated_at))
                }),
            ])
        }))
    })
}

fn display_date(value: &str) -> String {
    format_date(value, local_offset_minutes(value))
}

fn loading() -> Dom {
    html!(TAG_DIV, {
        .class(["text-center", "py-4"])
        .children([
            html!(TAG_DIV, {
                .class(["spinner-border", "text-primary"])
                .attr(PROP_ROLE, "status")
            }),
            html!("p", {
                .class("mt-2")
                .text("Cargando productos...")
            }),
        ])
    })
}

fn placeholder(icon_name: &str, title: &str, detail: &str) -> Dom {
    html!(TAG_DIV, {
        .class(["text-center", "py-4"])
        .class(css_class("placeholder"))
        .children([
            html!("i", {
                .class(["bi", icon_name, "fs-1", "text-muted"])
            }),
            html!("h5", {
                .class("mt-2")
                .text(title)
            }),
            html!("p", {
                .class("text-muted")
                .text(detail)
            }),
        ])
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use std::cell::RefCell;

    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn product(name: &str) -> Product {
        Product {
            id: "42".to_string(),
            name: name.to_string(),
            kind: "Muebles".to_string(),
            created_at: "2024-01-12T10:05:00Z".to_string(),
            updated_at: "not a date".to_string(),
        }
    }

    fn mount(dom: Dom) -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        dominator::append_dom(&root, dom);
        root
    }

    #[wasm_bindgen_test]
    fn script_name_is_inert_text() {
        let name = "<script>alert(1)</script>";
        let root = mount(product_card(&product(name), |_: &str| {}, |_: &str| {}));

        assert!(root.query_selector("script").unwrap().is_none());
        let title = root.query_selector(".card-title").unwrap().unwrap();
        assert_eq!(title.text_content().unwrap(), name);
        assert!(root.inner_html().contains("&lt;script&gt;"));
    }

    #[wasm_bindgen_test]
    fn unparseable_date_is_shown_verbatim() {
        let root = mount(product_card(&product("Mesa"), |_: &str| {}, |_: &str| {}));

        assert!(root.text_content().unwrap().contains("Actualizado: not a date"));
    }

    #[wasm_bindgen_test]
    fn actions_report_product_id() {
        let clicked = Rc::new(RefCell::new(vec![]));
        let edit = clone!(clicked => move |id: &str| clicked.borrow_mut().push(format!("edit {id}")));
        let delete = clone!(clicked => move |id: &str| clicked.borrow_mut().push(format!("delete {id}")));
        let root = mount(product_card(&product("Mesa"), edit, delete));

        let buttons = root.query_selector_all("button").unwrap();
        for i in 0..buttons.length() {
            let button: web_sys::HtmlElement = wasm_bindgen::JsCast::dyn_into(buttons.item(i).unwrap()).unwrap();
            button.click();
        }

        assert_eq!(*clicked.borrow(), vec!["edit 42".to_string(), "delete 42".to_string()]);
    }
}
