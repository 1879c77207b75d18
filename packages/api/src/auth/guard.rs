//! Route access table and the redirect decision made for every page request.

/// Where unauthenticated visitors of protected pages are sent.
pub const SIGN_IN_PATH: &str = "/auth/signin";
/// Where signed-in visitors of the auth pages are sent.
pub const AFTER_AUTH_PATH: &str = "/profile/create";

/// Prefix-matched pages that need a session.
const PROTECTED_PREFIXES: &[&str] = &["/profile", "/match", "/results", "/dashboard"];

/// Exact-matched pages anyone may view.
const PUBLIC_ROUTES: &[&str] = &[
    "/auth/signin",
    "/auth/signup",
    "/auth/forgot-password",
    "/",
    "/philosophy",
    "/synergy",
    "/mission",
    "/contact",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// API routes and static files; the guard does not look at them.
    Bypass,
    Protected,
    Public,
    /// Anything else, e.g. sign-out or unknown paths.
    Unlisted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Redirect(&'static str),
    /// Serve the request; `refresh` asks for a re-signed session cookie on the response.
    Continue { refresh: bool },
}

pub fn classify(path: &str) -> RouteAccess {
    if path == "/api"
        || path.starts_with("/api/")
        || path.starts_with("/assets/")
        || path.ends_with(".png")
    {
        return RouteAccess::Bypass;
    }
    if PROTECTED_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return RouteAccess::Protected;
    }
    if PUBLIC_ROUTES.contains(&path) {
        return RouteAccess::Public;
    }
    RouteAccess::Unlisted
}

/// Decide what to do with a request for `path` given whether it carries a valid session.
pub fn decide(path: &str, signed_in: bool) -> GuardDecision {
    match classify(path) {
        RouteAccess::Bypass => GuardDecision::Continue { refresh: false },
        RouteAccess::Protected if !signed_in => GuardDecision::Redirect(SIGN_IN_PATH),
        RouteAccess::Public if signed_in && path.starts_with("/auth") => {
            GuardDecision::Redirect(AFTER_AUTH_PATH)
        }
        _ => GuardDecision::Continue { refresh: signed_in },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("/api/influencers/match"), RouteAccess::Bypass);
        assert_eq!(classify("/assets/main.css"), RouteAccess::Bypass);
        assert_eq!(classify("/logo.png"), RouteAccess::Bypass);
        assert_eq!(classify("/profile"), RouteAccess::Protected);
        assert_eq!(classify("/profile/create"), RouteAccess::Protected);
        assert_eq!(classify("/match"), RouteAccess::Protected);
        assert_eq!(classify("/results"), RouteAccess::Protected);
        assert_eq!(classify("/dashboard/stats"), RouteAccess::Protected);
        assert_eq!(classify("/"), RouteAccess::Public);
        assert_eq!(classify("/mission"), RouteAccess::Public);
        assert_eq!(classify("/auth/signin"), RouteAccess::Public);
        assert_eq!(classify("/auth/signout"), RouteAccess::Unlisted);
        assert_eq!(classify("/mission/extra"), RouteAccess::Unlisted);
    }

    #[test]
    fn test_protected_without_session_redirects_to_sign_in() {
        assert_eq!(decide("/match", false), GuardDecision::Redirect(SIGN_IN_PATH));
        assert_eq!(decide("/profile/create", false), GuardDecision::Redirect(SIGN_IN_PATH));
        assert_eq!(decide("/match", true), GuardDecision::Continue { refresh: true });
    }

    #[test]
    fn test_auth_pages_with_session_redirect_to_profile() {
        assert_eq!(decide("/auth/signin", true), GuardDecision::Redirect(AFTER_AUTH_PATH));
        assert_eq!(decide("/auth/signup", true), GuardDecision::Redirect(AFTER_AUTH_PATH));
        assert_eq!(decide("/auth/signin", false), GuardDecision::Continue { refresh: false });
        // Public pages outside /auth stay reachable.
        assert_eq!(decide("/", true), GuardDecision::Continue { refresh: true });
    }

    #[test]
    fn test_bypass_never_refreshes() {
        assert_eq!(
            decide("/api/influencers/match", true),
            GuardDecision::Continue { refresh: false }
        );
    }
}
