use dominator::{Dom, events, html, with_node};
use futures_signals::signal::Mutable;
use web_sys::HtmlInputElement;

use crate::constants::{PROP_NAME, PROP_PLACEHOLDER, PROP_TYPE, PROP_VALUE, TAG_DIV, TAG_INPUT, TAG_LABEL};

/// Labelled input bound both ways to `value`.
pub fn form_field(label: &str, name: &str, input_type: &str, value: Mutable<String>) -> Dom {
    html!(TAG_DIV, {
        .class("mb-3")
        .children([
            html!(TAG_LABEL, {
                .class("form-label")
                .attr("for", name)
                .text(label)
            }),
            html!(TAG_INPUT => HtmlInputElement, {
                .class("form-control")
                .attr("id", name)
                .attr(PROP_NAME, name)
                .attr(PROP_TYPE, input_type)
                .attr(PROP_PLACEHOLDER, label)
                .prop_signal(PROP_VALUE, value.signal_cloned())
                .with_node!(element => {
                    .event(move |_: events::Input| {
                        value.set_neq(element.value());
                    })
                })
            }),
        ])
    })
}
