use api::UserInfo;
use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::{Navbar, MAIN_CSS};

/// Head and body shared by every page: navbar, main column, footer.
///
/// [`render_page`](crate::render_page) wraps the output in the `html` element.
#[component]
pub fn Layout(
    #[props(into)] page_title: String,
    user: Option<UserInfo>,
    children: Element,
) -> Element {
    let year = Utc::now().year();

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{page_title} · AuraMatch" }
            link { rel: "stylesheet", href: MAIN_CSS }
        }
        body {
            Navbar { user }
            main { class: "container", {children} }
            footer { class: "footer",
                p { "© {year} AuraMatch. All rights reserved." }
                p { class: "muted", "Influencer aura tracking and brand resonance matching." }
            }
        }
    }
}
