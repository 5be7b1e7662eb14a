pub mod app;
pub mod views;

pub use app::App;
