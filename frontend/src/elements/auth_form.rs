use std::rc::Rc;

use dominator::{clone, Dom, EventOptions, events, html};
use futures_signals::signal::{Mutable, SignalExt};
use wasm_bindgen_futures::spawn_local;

use shared::constants::{API_LOGIN, API_REGISTER};
use shared::types::{Credentials, Page};

use crate::api::authenticate;
use crate::config::CONFIG;
use crate::constants::{MSG_CONNECTION_RETRY, PROP_DISABLED, PROP_HREF, PROP_ROLE, PROP_TYPE, TAG_BUTTON, TAG_DIV, TAG_LINK, TAG_SPAN};
use crate::elements::app_login::validate_login;
use crate::elements::app_message::{Level, Messages};
use crate::elements::app_register::validate_registration;
use crate::elements::form_field::form_field;
use crate::error::ValidationError;
use crate::platform::Platform;
use crate::session::Session;
use crate::utils::set_title;

const FIELD_EMAIL: &str = "email";
const FIELD_PASS: &str = "password";
const FIELD_CONFIRM: &str = "confirmPassword";

fn css_class(label: &str) -> String {
    format!("app-auth__{label}")
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuthKind {
    Login,
    Register,
}

impl AuthKind {
    fn endpoint(&self) -> &'static str {
        match *self {
            AuthKind::Login => API_LOGIN,
            AuthKind::Register => API_REGISTER,
        }
    }

    fn title(&self) -> &'static str {
        match *self {
            AuthKind::Login => "Iniciar Sesión",
            AuthKind::Register => "Crear Cuenta",
        }
    }

    fn idle_label(&self) -> &'static str {
        self.title()
    }

    fn busy_label(&self) -> &'static str {
        match *self {
            AuthKind::Login => "Iniciando sesión...",
            AuthKind::Register => "Registrando...",
        }
    }

    fn success_message(&self) -> &'static str {
        match *self {
            AuthKind::Login => "¡Inicio de sesión exitoso! Redirigiendo...",
            AuthKind::Register => "¡Registro exitoso! Redirigiendo...",
        }
    }

    fn failure_fallback(&self) -> &'static str {
        match *self {
            AuthKind::Login => "Error al iniciar sesión",
            AuthKind::Register => "Error al registrarse",
        }
    }

    /// Where an already signed-in visitor is sent on page load.
    pub fn authenticated_target(&self) -> Page {
        match *self {
            AuthKind::Login => Page::Index,
            AuthKind::Register => Page::Products,
        }
    }

    fn switch_link(&self) -> (&'static str, Page) {
        match *self {
            AuthKind::Login => ("¿No tienes cuenta? Regístrate", Page::Register),
            AuthKind::Register => ("¿Ya tienes cuenta? Inicia sesión", Page::Login),
        }
    }
}

pub struct AuthForm<P> {
    kind: AuthKind,
    session: Rc<Session<P>>,
    pub email: Mutable<String>,
    pub password: Mutable<String>,
    pub confirm: Mutable<String>,
    pub busy: Mutable<bool>,
    pub messages: Rc<Messages>,
}

impl<P: Platform> AuthForm<P> {
    pub fn new(kind: AuthKind, session: Rc<Session<P>>) -> Rc<Self> {
        Rc::new(Self {
            kind,
            session,
            email: Mutable::new(String::new()),
            password: Mutable::new(String::new()),
            confirm: Mutable::new(String::new()),
            busy: Mutable::new(false),
            messages: Rc::new(Messages::default()),
        })
    }

    #[cfg(test)]
    pub fn session(&self) -> &Rc<Session<P>> {
        &self.session
    }

    fn validate(&self) -> Result<Credentials, ValidationError> {
        let email = self.email.get_cloned();
        let password = self.password.get_cloned();
        match self.kind {
            AuthKind::Login => validate_login(&email, &password),
            AuthKind::Register => validate_registration(&email, &password, &self.confirm.get_cloned()),
        }
    }

    pub async fn submit(&self) {
        let credentials = match self.validate() {
            Ok(credentials) => credentials,
            Err(err) => {
                self.messages.show(Level::Warning, &err.to_string());
                return;
            }
        };

        self.busy.set(true);
        let platform = self.session.platform();
        let result = authenticate(platform, self.kind.endpoint(), &credentials).await;
        self.busy.set(false);

        match result {
            Ok(data) => {
                log::info!("{} succeeded for {}", self.kind.endpoint(), credentials.email);
                self.session.store_token(&data.token);
                self.messages.show(Level::Success, self.kind.success_message());
                platform.sleep(CONFIG.redirect_delay_ms).await;
                platform.navigate(Page::Products);
            }
            Err(err) => {
                self.messages.show(Level::Danger, err.describe(self.kind.failure_fallback(), MSG_CONNECTION_RETRY));
            }
        }
    }

    pub fn render(form: Rc<Self>) -> Dom {
        set_title(form.kind.title());
        let kind = form.kind;
        let (switch_text, switch_page) = kind.switch_link();

        let mut fields = vec![
            form_field("Correo electrónico", FIELD_EMAIL, "email", form.email.clone()),
            form_field("Contraseña", FIELD_PASS, "password", form.password.clone()),
        ];
        if kind == AuthKind::Register {
            fields.push(form_field("Confirmar contraseña", FIELD_CONFIRM, "password", form.confirm.clone()));
        }

        html!(TAG_DIV, {
            .class(css_class("container"))
            .children([
                html!("h2", {
                    .class(css_class("title"))
                    .text(kind.title())
                }),
                Messages::render(form.messages.clone()),
                html!("form", {
                    .attr("novalidate", "")
                    .children(fields)
                    .child(html!(TAG_BUTTON, {
                        .attr(PROP_TYPE, "submit")
                        .class(["btn", "btn-primary", "w-100"])
                        .prop_signal(PROP_DISABLED, form.busy.signal())
                        .child(html!(TAG_SPAN, {
                            .class(["spinner-border", "spinner-border-sm", "me-2"])
                            .attr(PROP_ROLE, "status")
                            .visible_signal(form.busy.signal())
                        }))
                        .text_signal(form.busy.signal().map(move |busy| if busy { kind.busy_label() } else { kind.idle_label() }))
                        .event_with_options(&EventOptions::preventable(), clone!(form => move |e: events::Click| {
                            e.prevent_default();
                            spawn_local(clone!(form => async move {
                                form.submit().await;
                            }));
                        }))
                    }))
                }),
                html!(TAG_LINK, {
                    .class(css_class("switch"))
                    .attr(PROP_HREF, switch_page.path())
                    .text(switch_text)
                }),
            ])
        })
    }
}

/// Entry for `/login` and `/register`. Signed-in visitors are redirected and
/// nothing is rendered.
pub fn auth_page<P: Platform>(kind: AuthKind, session: &Rc<Session<P>>) -> Option<Dom> {
    if session.is_authenticated() {
        session.platform().navigate(kind.authenticated_target());
        return None;
    }
    Some(AuthForm::render(AuthForm::new(kind, session.clone())))
}
