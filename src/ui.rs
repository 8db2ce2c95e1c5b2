mod handlers;
mod render;

pub use render::run_app;
