use std::rc::Rc;

use dominator::Dom;

use shared::types::Credentials;

use crate::elements::auth_form::{auth_page, AuthKind};
use crate::error::ValidationError;
use crate::platform::Platform;
use crate::session::Session;

pub fn login_page<P: Platform>(session: &Rc<Session<P>>) -> Option<Dom> {
    auth_page(AuthKind::Login, session)
}

pub fn validate_login(email: &str, password: &str) -> Result<Credentials, ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(Credentials { email: email.to_string(), password: password.to_string() })
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use shared::types::Page;

    use crate::elements::app_message::Level;
    use crate::elements::auth_form::AuthForm;
    use crate::error::ApiError;
    use crate::platform::fake::FakePlatform;

    use super::*;

    fn form(email: &str, password: &str) -> Rc<AuthForm<FakePlatform>> {
        let session = Session::new(Rc::new(FakePlatform::new(None)));
        let form = AuthForm::new(AuthKind::Login, session);
        form.email.set(email.to_string());
        form.password.set(password.to_string());
        form
    }

    fn platform(form: &AuthForm<FakePlatform>) -> &FakePlatform {
        form.session().platform()
    }

    #[test]
    fn test_validate_login() {
        assert_eq!(validate_login("", "secret"), Err(ValidationError::MissingFields));
        assert_eq!(validate_login("a@b.c", ""), Err(ValidationError::MissingFields));
        assert_eq!(
            validate_login("a@b.c", "x"),
            Ok(Credentials { email: "a@b.c".to_string(), password: "x".to_string() })
        );
    }

    #[test]
    fn test_empty_field_makes_no_request() {
        for (email, password) in [("", "secret"), ("a@b.c", ""), ("", "")] {
            let form = form(email, password);
            block_on(form.submit());

            assert_eq!(platform(&form).request_count(), 0);
            let message = form.messages.current().unwrap();
            assert_eq!(message.level, Level::Warning);
            assert_eq!(message.text, "Por favor, completa todos los campos");
        }
    }

    #[test]
    fn test_success_stores_token_and_redirects_after_delay() {
        let form = form("a@b.c", "secret");
        platform(&form).respond(200, r#"{"token":"jwt"}"#);

        block_on(form.submit());

        assert_eq!(platform(&form).request(0).path, "/api/auth/login");
        assert_eq!(platform(&form).load_token(), Some("jwt".to_string()));
        assert_eq!(*platform(&form).sleeps.borrow(), vec![1500]);
        assert_eq!(platform(&form).navigations(), vec![Page::Products]);
        assert_eq!(form.messages.current().unwrap().level, Level::Success);
        assert!(!form.busy.get());
    }

    #[test]
    fn test_server_error_text_is_shown() {
        let form = form("a@b.c", "wrong");
        platform(&form).respond(401, r#"{"error":"Credenciales inválidas"}"#);

        block_on(form.submit());

        let message = form.messages.current().unwrap();
        assert_eq!(message.level, Level::Danger);
        assert_eq!(message.text, "Credenciales inválidas");
        assert!(platform(&form).navigations().is_empty());
        assert_eq!(platform(&form).load_token(), None);
        assert!(!form.busy.get());
    }

    #[test]
    fn test_server_error_fallback() {
        let form = form("a@b.c", "secret");
        platform(&form).respond(500, "");

        block_on(form.submit());

        assert_eq!(form.messages.current().unwrap().text, "Error al iniciar sesión");
    }

    #[test]
    fn test_network_failure() {
        let form = form("a@b.c", "secret");
        platform(&form).fail(ApiError::Network("offline".to_string()));

        block_on(form.submit());

        assert_eq!(form.messages.current().unwrap().text, "Error de conexión. Inténtalo de nuevo.");
        assert!(!form.busy.get());
    }

    #[test]
    fn test_signed_in_visitor_is_sent_to_index() {
        let session = Session::new(Rc::new(FakePlatform::new(Some("jwt"))));

        assert!(login_page(&session).is_none());
        assert_eq!(session.platform().navigations(), vec![Page::Index]);
    }
}
