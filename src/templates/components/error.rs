use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Build a basic HTML error page
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="container" {
                div class="alert alert-danger" role="alert" {
                    h1 class="h4" { "Error " (status) }
                    p class="mb-2" { (message) }
                    a href="/" { "← Kembali ke daftar event" }
                }
            }
        },
    )
}

