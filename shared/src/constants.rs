pub static ROOT_API: &'static str = "api";
pub static API_LOGIN: &'static str = "auth/login";
pub static API_REGISTER: &'static str = "auth/register";
pub static API_PRODUCTS: &'static str = "products";

pub static HEADER_CONTENT_TYPE: &'static str = "Content-Type";
pub static HEADER_AUTHORIZATION: &'static str = "Authorization";
pub static CONTENT_TYPE_JSON: &'static str = "application/json";

pub static PATH_INDEX: &'static str = "/";
pub static PATH_LOGIN: &'static str = "/login";
pub static PATH_REGISTER: &'static str = "/register";
pub static PATH_PRODUCTS: &'static str = "/products";
