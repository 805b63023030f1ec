use std::cell::Cell;
use std::rc::Rc;

use dominator::{clone, Dom, events, html};
use futures_signals::signal::{Mutable, SignalExt};
use gloo_timers::future::TimeoutFuture;

use crate::config::CONFIG;
use crate::constants::{PROP_ROLE, TAG_BUTTON, TAG_DIV};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Danger,
}

impl Level {
    fn css(&self) -> &'static str {
        match *self {
            Level::Success => "alert-success",
            Level::Warning => "alert-warning",
            Level::Danger => "alert-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u32,
    pub level: Level,
    pub text: String,
}

/// The single inline alert slot of a page. A newer message replaces the
/// current one.
#[derive(Default)]
pub struct Messages {
    current: Mutable<Option<Message>>,
    counter: Cell<u32>,
}

impl Messages {
    pub fn show(&self, level: Level, text: &str) -> u32 {
        let id = self.counter.get() + 1;
        self.counter.set(id);
        match level {
            Level::Danger => log::error!("{text}"),
            _ => log::info!("{text}"),
        }
        self.current.set(Some(Message { id, level, text: text.to_string() }));
        id
    }

    /// Removes the message only if `id` is still the one on screen.
    pub fn dismiss(&self, id: u32) {
        let mut current = self.current.lock_mut();
        if current.as_ref().map(|m| m.id) == Some(id) {
            *current = None;
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<Message> {
        self.current.get_cloned()
    }

    pub fn render(messages: Rc<Self>) -> Dom {
        html!(TAG_DIV, {
            .attr("id", "message")
            .child_signal(messages.current.signal_cloned().map(clone!(messages => move |message| {
                message.map(|message| alert(messages.clone(), message))
            })))
        })
    }
}

fn alert(messages: Rc<Messages>, message: Message) -> Dom {
    let id = message.id;
    html!(TAG_DIV, {
        .class(["alert", message.level.css(), "alert-dismissible", "fade", "show"])
        .attr(PROP_ROLE, "alert")
        .text(&message.text)
        .child(html!(TAG_BUTTON, {
            .attr("type", "button")
            .class("btn-close")
            .attr("aria-label", "close")
            .event(clone!(messages => move |_: events::Click| messages.dismiss(id)))
        }))
        .future(clone!(messages => async move {
            TimeoutFuture::new(CONFIG.message_dismiss_ms).await;
            messages.dismiss(id);
        }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_current() {
        let messages = Messages::default();
        let first = messages.show(Level::Warning, "uno");
        let second = messages.show(Level::Success, "dos");

        assert_ne!(first, second);
        assert_eq!(messages.current(), Some(Message { id: second, level: Level::Success, text: "dos".to_string() }));
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_message() {
        let messages = Messages::default();
        let first = messages.show(Level::Danger, "uno");
        let second = messages.show(Level::Danger, "dos");

        messages.dismiss(first);
        assert_eq!(messages.current().map(|m| m.id), Some(second));

        messages.dismiss(second);
        assert_eq!(messages.current(), None);
    }
}
