pub mod app;
pub mod game_circle;
pub mod game_grid;
pub mod game_over_overlay;
pub mod intro_overlay;
pub mod status_banner;
pub mod timer_display;
