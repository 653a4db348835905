pub mod app;
pub mod component;
pub mod conf;
pub mod crud;
pub mod error;
pub mod error_template;
pub mod notify;
pub mod page;

pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
