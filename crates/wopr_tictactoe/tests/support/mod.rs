pub mod board_gens;
