pub mod app_header;
pub mod app_index;
pub mod app_login;
pub mod app_message;
pub mod app_register;
pub mod auth_form;
pub mod form_field;
pub mod icons;
