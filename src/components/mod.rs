pub mod app;
pub mod zoomable;

pub use app::App;
pub use zoomable::Zoomable;
