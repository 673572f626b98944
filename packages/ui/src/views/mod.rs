mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod error_banner;
pub use error_banner::ErrorBanner;

mod section;
pub use section::{ItemCard, Section};

mod admin;
pub use admin::AdminView;

mod home;
pub use home::{HomeView, HOME_ITEMS};

mod public_list;
pub use public_list::PublicListView;

mod profile;
pub use profile::ProfileView;

mod not_found;
pub use not_found::NotFoundView;
