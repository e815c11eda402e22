pub mod filter_panel;
