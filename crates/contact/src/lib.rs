mod assist;
mod delivery;
mod draft;
mod error;
mod form;
pub mod placeholder;
mod scheduler;
mod session;
mod status;

pub use assist::*;
pub use delivery::*;
pub use draft::*;
pub use error::*;
pub use form::*;
pub use scheduler::*;
pub use session::*;
pub use status::*;
