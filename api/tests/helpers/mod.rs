pub mod app;

pub use app::make_app;
