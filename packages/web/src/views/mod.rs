mod layout;
pub use layout::Layout;

mod home;
pub use home::Home;

mod browse;
pub use browse::Browse;

mod profile;
pub use profile::Profile;

mod admin;
pub use admin::Admin;

mod not_found;
pub use not_found::NotFound;
