//! This crate contains all page components for the site.
//!
//! Pages are plain props-driven components rendered on the server with
//! [`render_page`]; there is no client-side runtime.

use dioxus::prelude::*;

mod layout;
pub use layout::Layout;

mod navbar;
pub use navbar::Navbar;

mod form;
pub use form::{Alert, AlertKind, FieldMessages};

pub mod views;

/// Path of the stylesheet served by the web crate.
pub const MAIN_CSS: &str = "/assets/main.css";

/// Render a page element to a complete HTML document.
pub fn render_page(page: Element) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render_element(page)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_page_wraps_document() {
        let html = render_page(rsx! {
            Layout { page_title: "Home", user: None::<api::UserInfo>,
                p { "hello" }
            }
        });
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
        assert!(html.ends_with("</body></html>"));
        assert!(html.contains("<title>Home · AuraMatch</title>"));
        assert!(html.contains("<p>hello</p>"));
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use api::{AccountType, UserInfo};

    pub fn user() -> UserInfo {
        UserInfo {
            id: "00000000-0000-0000-0000-000000000001".into(),
            email: "sophia@example.com".into(),
            first_name: Some("Sophia".into()),
            last_name: Some("Rodriguez".into()),
            account_type: Some(AccountType::Influencer),
        }
    }
}
