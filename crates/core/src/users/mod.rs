//! Users module - account records, authentication, and the session context.

mod auth_errors;
mod auth_service;
mod session;
mod users_model;
mod users_traits;


pub use auth_errors::AuthError;
pub use auth_service::AuthService;
pub use session::SessionContext;
pub use users_model::{Credentials, NewUser, SignUp, User, UserProfile};
pub use users_traits::{AuthServiceTrait, UserRepositoryTrait};
