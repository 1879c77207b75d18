use api::UserInfo;
use dioxus::prelude::*;

use crate::Layout;

#[component]
pub fn NotFoundView(user: Option<UserInfo>) -> Element {
    rsx! {
        Layout { page_title: "Page Not Found", user,
            section { class: "status-page",
                h1 { "404" }
                p { "The page you are looking for does not exist." }
                a { class: "button", href: "/", "Back home" }
            }
        }
    }
}

/// Generic failure page. `message` must be safe to show to visitors.
#[component]
pub fn ErrorView(user: Option<UserInfo>, #[props(into)] message: String) -> Element {
    rsx! {
        Layout { page_title: "Something Went Wrong", user,
            section { class: "status-page",
                h1 { "Something went wrong" }
                p { "{message}" }
                a { class: "button", href: "/", "Back home" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_page;

    #[test]
    fn test_status_pages() {
        let html = render_page(rsx! { NotFoundView { user: None::<UserInfo> } });
        assert!(html.contains("<h1>404</h1>"));

        let html = render_page(rsx! { ErrorView { user: None::<UserInfo>, message: "Please try again later." } });
        assert!(html.contains("Please try again later."));
    }
}
