//! Shared wire model for Gantry services.
//!
//! Defines the cross-service response/request structs that every backend
//! consumes:
//! - [`SiteWalkType`], [`ActionView`], [`MediaParam`] — polymorphic fields
//!   a producing service may collapse to a bare identity string
//! - [`Media`] — media reference with an untyped per-provider
//!   `ref_info` payload
//! - [`User`], [`Contract`], [`Location`] — thin shared party/site structs
//! - [`Page`] / [`PageQuery`] — the pagination envelope
//!
//! The codec machinery these build on (scalar string codecs, dynamic JSON
//! access, the object-or-string decode flow) lives in `gantry-types`.

mod action;
mod media;
mod page;
mod party;
mod site_walk;

pub use action::ActionView;
pub use media::{Media, MediaParam};
pub use page::{Page, PageQuery};
pub use party::{Contract, Location, User};
pub use site_walk::SiteWalkType;
