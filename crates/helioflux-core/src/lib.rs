//! Interaction core for the HelioFlux site.
//!
//! Everything here is platform-free: the web crate feeds DOM events in and
//! applies the resulting [`Effect`]s, while tests drive the same state machines
//! on a virtual clock.

pub mod config;
pub mod constants;
pub mod counter;
pub mod error;
pub mod form;
pub mod notify;
pub mod orientation;
pub mod page;
pub mod pricing;
pub mod race;
pub mod reveal;
pub mod scroll;
pub mod timeline;
pub mod visibility;

/// Index of an observed element, assigned in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// Index of a submit-handled form, assigned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormId(pub usize);

pub use config::PageConfig;
pub use error::{CoreError, CoreResult};
pub use notify::{NotificationId, NotificationKind};
pub use page::{Effect, Page, Task};
pub use visibility::{Category, LazyKind};
