use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Por favor, completa todos los campos")]
    MissingFields,

    #[error("La contraseña debe tener al menos {0} caracteres")]
    PasswordTooShort(usize),

    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("session rejected by the server")]
    Unauthorized,

    #[error("server responded {status}: {}", .message.as_deref().unwrap_or("-"))]
    Server { status: u16, message: Option<String> },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Decode(_))
    }

    /// Text shown to the user: the server's own message when it sent one,
    /// `connection` for transport failures, `fallback` otherwise.
    pub fn describe<'a>(&'a self, fallback: &'a str, connection: &'a str) -> &'a str {
        match self {
            ApiError::Server { message: Some(message), .. } => message,
            ApiError::Network(_) | ApiError::Decode(_) => connection,
            _ => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_prefers_server_message() {
        let err = ApiError::Server { status: 409, message: Some("El usuario ya existe".to_string()) };
        assert_eq!(err.describe("Error al registrarse", "Error de conexión"), "El usuario ya existe");
    }

    #[test]
    fn test_describe_fallbacks() {
        let err = ApiError::Server { status: 500, message: None };
        assert_eq!(err.describe("fallback", "offline"), "fallback");

        let err = ApiError::Network("TypeError: Failed to fetch".to_string());
        assert!(err.is_transport());
        assert_eq!(err.describe("fallback", "offline"), "offline");

        let err = ApiError::Decode("expected value".to_string());
        assert_eq!(err.describe("fallback", "offline"), "offline");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::PasswordTooShort(6).to_string(), "La contraseña debe tener al menos 6 caracteres");
        assert_eq!(ValidationError::MissingFields.to_string(), "Por favor, completa todos los campos");
    }
}
