pub mod board_grid;
pub mod game_over_banner;
pub mod splash;
