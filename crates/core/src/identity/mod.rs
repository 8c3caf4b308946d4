mod functions;
mod traits;
mod types;
mod validation;

pub use functions::login_link;
pub use traits::IdentityProvider;
pub use types::{Identity, LoginLink};
pub use validation::validate_return_to;
