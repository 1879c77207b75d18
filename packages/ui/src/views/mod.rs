mod home;
pub use home::HomeView;

mod about;
pub use about::{MissionView, PhilosophyView, SynergyView};

mod contact;
pub use contact::ContactView;

mod sign_in;
pub use sign_in::SignInView;

mod sign_up;
pub use sign_up::SignUpView;

mod forgot_password;
pub use forgot_password::ForgotPasswordView;

mod profile;
pub use profile::ProfileView;

mod match_form;
pub use match_form::MatchFormView;

mod results;
pub use results::ResultsView;

mod status;
pub use status::{ErrorView, NotFoundView};
