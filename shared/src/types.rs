use serde::{Deserialize, Serialize};

use crate::constants::{PATH_INDEX, PATH_LOGIN, PATH_PRODUCTS, PATH_REGISTER};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Page {
    Index,
    Login,
    Register,
    Products,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match *self {
            Page::Index => PATH_INDEX,
            Page::Login => PATH_LOGIN,
            Page::Register => PATH_REGISTER,
            Page::Products => PATH_PRODUCTS,
        }
    }

    /// Resolves a `location.pathname`. A trailing slash is ignored, so
    /// `/products/` is the product page.
    pub fn from_path(pathname: &str) -> Option<Page> {
        let trimmed = pathname.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Page::Index);
        }
        [Page::Login, Page::Register, Page::Products]
            .into_iter()
            .find(|page| page.path() == trimmed)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: String,
    #[serde(rename = "fecha_ultima_actualizacion", default)]
    pub updated_at: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ProductRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/"), Some(Page::Index));
        assert_eq!(Page::from_path(""), Some(Page::Index));
        assert_eq!(Page::from_path("/login"), Some(Page::Login));
        assert_eq!(Page::from_path("/register/"), Some(Page::Register));
        assert_eq!(Page::from_path("/products"), Some(Page::Products));
        assert_eq!(Page::from_path("/products/42"), None);
        assert_eq!(Page::from_path("/admin"), None);
    }

    #[test]
    fn test_product_wire_names() {
        let body = r#"{
            "id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "nombre": "Teclado",
            "tipo": "Periféricos",
            "user_id": "65a1f0c2e4b0a1b2c3d4e5f0",
            "fecha_creacion": "2024-01-12T10:30:00Z",
            "fecha_ultima_actualizacion": "2024-01-13T08:00:00.123Z"
        }"#;
        let product: Product = serde_json::from_str(body).unwrap();

        assert_eq!(product.id, "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(product.name, "Teclado");
        assert_eq!(product.kind, "Periféricos");
        assert_eq!(product.created_at, "2024-01-12T10:30:00Z");
        assert_eq!(product.updated_at, "2024-01-13T08:00:00.123Z");
    }

    #[test]
    fn test_product_request_body() {
        let request = ProductRequest { name: "Silla".to_string(), kind: "Muebles".to_string() };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json, serde_json::json!({"nombre": "Silla", "tipo": "Muebles"}));
    }

    #[test]
    fn test_error_response_without_error_field() {
        let body: ErrorResponse = serde_json::from_str(r#"{"message": "x"}"#).unwrap();
        assert_eq!(body.error, None);
    }
}
