mod app;
mod departure;
mod excursion;
mod header;
mod home;
mod status_banner;

pub use app::App;
pub use departure::DepartureScreen;
pub use excursion::ExcursionScreen;
pub use header::Header;
pub use home::HomeScreen;
pub use status_banner::StatusBanner;
