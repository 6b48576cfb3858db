//! UI Components

pub mod footer;
pub mod loader;
pub mod navbar;
pub mod notice;
pub mod services;
pub mod transactions;
pub mod welcome;

pub use footer::Footer;
pub use loader::Loader;
pub use navbar::Navbar;
pub use notice::NoticeBanner;
pub use services::Services;
pub use transactions::Transactions;
pub use welcome::Welcome;
