//! # rsvp-gate
//!
//! Guards writes to the event aggregate behind two independent gates:
//!
//! - **Validation** ([`validation`]): is the proposed state internally
//!   consistent? Violations are collected with [`Assertions`] and reported
//!   together as a [`ValidationError`].
//! - **Authorization** ([`authorization`]): may the acting user make this
//!   transition? Role policies are OR-ed by [`AuthorizeEvent`]; a denial is
//!   a [`NotAuthorized`].
//!
//! Both gates are pure and synchronous. They are applied to storage through
//! repository decorators ([`repository`]), normally wired as
//! authorization → validation → store by [`EventGate::wrap`].

mod assertions;
pub mod authorization;
mod error;
mod gate;
pub mod repository;
pub mod validation;

pub use assertions::Assertions;
pub use authorization::{AuthorizationPolicy, Authorize, AuthorizeEvent};
pub use error::{NotAuthorized, RepositoryError, RepositoryResult, ValidationError};
pub use gate::{EventGate, GatedRepository};
pub use repository::{AuthorizingRepository, InMemoryRepository, Repository, ValidatingRepository};
pub use validation::{Validate, ValidateEvent, ValidateMember};
