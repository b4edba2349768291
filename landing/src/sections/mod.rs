// Landing page sections

/// Company display name used across the page (single source of truth)
pub const COMPANY_NAME: &str = "Infinity Property Management";

/// Aggregate review score shown in the hero and the quick-fact pills
pub const AVERAGE_RATING: &str = "4.8/5";

mod contact;
mod footer;
mod hero;
mod nav;
mod reviews;
mod services;
mod story;

pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use reviews::Reviews;
pub use services::Services;
pub use story::Story;
