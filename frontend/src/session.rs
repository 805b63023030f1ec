use std::rc::Rc;

use futures_signals::signal::{Mutable, Signal};

use shared::constants::{CONTENT_TYPE_JSON, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE};
use shared::types::Page;
use shared::utils::bearer;

use crate::platform::Platform;
use crate::types::Headers;

const LOGOUT_CONFIRM: &str = "¿Estás seguro de que quieres cerrar sesión?";

/// Token persistence plus the observable every token change is published on.
pub struct Session<P> {
    platform: Rc<P>,
    token: Mutable<Option<String>>,
}

impl<P: Platform> Session<P> {
    pub fn new(platform: Rc<P>) -> Rc<Self> {
        let token = Mutable::new(platform.load_token());
        Rc::new(Self { platform, token })
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Reads storage, not the published value, so a token removed by
    /// another tab counts as absent.
    pub fn is_authenticated(&self) -> bool {
        self.platform.load_token().is_some()
    }

    pub fn authenticated_signal(&self) -> impl Signal<Item=bool> {
        self.token.signal_ref(|token| token.is_some())
    }

    pub fn require_auth(&self) -> bool {
        if self.is_authenticated() {
            true
        } else {
            self.platform.navigate(Page::Login);
            false
        }
    }

    pub fn api_headers(&self) -> Headers {
        let token = self.platform.load_token();
        vec![
            (HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON.to_string()),
            (HEADER_AUTHORIZATION, bearer(token.as_deref())),
        ]
    }

    pub fn store_token(&self, token: &str) {
        self.platform.save_token(token);
        self.refresh();
    }

    pub fn clear_token(&self) {
        self.platform.remove_token();
        self.refresh();
    }

    /// Republishes whatever storage holds now.
    pub fn refresh(&self) {
        self.token.set_neq(self.platform.load_token());
    }

    pub fn logout(&self) {
        if self.platform.confirm(LOGOUT_CONFIRM) {
            self.clear_token();
            self.platform.navigate(Page::Login);
        }
    }

    /// Token lost on the server side: drop it and go to the login page.
    pub fn expire(&self) {
        log::info!("session expired");
        self.clear_token();
        self.platform.navigate(Page::Login);
    }
}
