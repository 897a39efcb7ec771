pub mod login_form;
pub mod register_form;
pub mod role_selector;

pub use login_form::LoginFormComponent;
pub use register_form::RegisterFormComponent;
pub use role_selector::RoleSelector;
