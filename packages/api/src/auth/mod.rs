//! Authentication: credentials, signed session cookies and the route guard table.

mod forms;
mod guard;
mod password;
mod session;

pub use forms::{ForgotPasswordForm, ProfileForm, SignInForm, SignUpForm, ValidSignUp};
pub use guard::{classify, decide, GuardDecision, RouteAccess, AFTER_AUTH_PATH, SIGN_IN_PATH};
pub use password::{hash_password, verify_password};
pub use session::{
    read_session_cookie, SessionError, SessionKeys, SessionPayload, SESSION_COOKIE,
};

pub use cookie::Cookie;
