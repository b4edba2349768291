//! # infinity-catalog
//!
//! Core state for the Infinity Property Management site: the fixed service
//! catalog, the search/paging browser behind the services carousel, and the
//! typed contact request handed to the submission collaborator.
//!
//! The crate is deliberately framework-free so the browsing logic can be
//! exercised on the host without a rendering layer. The `infinity-landing`
//! crate owns all markup and wires these types into Leptos signals.
//!
//! ## Quick Start
//!
//! ```rust
//! use infinity_catalog::{Catalog, ServiceBrowser};
//!
//! let mut browser = ServiceBrowser::new(Catalog::builtin());
//! browser.set_query("property");
//!
//! // Collapsed mode shows at most the first three matches.
//! assert_eq!(browser.current_page().len(), 3);
//!
//! browser.toggle_show_all();
//! assert_eq!(browser.page_count(), 3);
//! ```

pub mod browse;
pub mod catalog;
pub mod contact;

pub use browse::{PAGE_SIZE, ServiceBrowser};
pub use catalog::Catalog;
pub use contact::{ContactError, ContactRequest};
