//! The public landing page.

use ironhtml::html;
use ironhtml_elements::Div;
use shopdesk_router::Route;

/// Renders the landing page with links to sign in and register.
pub fn render_home() -> String {
    let login = Route::Login.path();
    let register = Route::Register.path();

    let heading = html! { h1.class("mb-4") { "Welcome To My Ecommerce Website" } };
    let login_link = html! {
        a.class("btn btn-primary me-2").href(#login) { "Log In" }
    };
    let register_link = html! {
        a.class("btn btn-outline-secondary").href(#register) { "Register" }
    };

    html! { div.class("container py-5 text-center") }
        .raw(heading.render())
        .child::<Div, _>(|d| d.raw(login_link.render()).raw(register_link.render()))
        .render()
}
