pub static PROP_ROLE: &'static str = "role";
pub static PROP_NAME: &'static str = "name";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_DISABLED: &'static str = "disabled";
pub static PROP_HREF: &'static str = "href";
pub static PROP_PLACEHOLDER: &'static str = "placeholder";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_BUTTON: &'static str = "button";
pub static TAG_LINK: &'static str = "a";
pub static TAG_LABEL: &'static str = "label";

pub static ID_AUTH_SECTION: &'static str = "authSection";
pub static ID_PRODUCT_FORM: &'static str = "productForm";

pub static MSG_CONNECTION: &'static str = "Error de conexión";
pub static MSG_CONNECTION_RETRY: &'static str = "Error de conexión. Inténtalo de nuevo.";
