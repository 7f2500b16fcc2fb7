// src/gui/components/mod.rs
pub mod chart_view;
pub mod check_grid;
pub mod export_bar;
pub mod listings_table;
pub mod sidebar;
pub mod stat_cards;
pub mod toast;
