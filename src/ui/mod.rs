// src/ui/mod.rs
pub mod drawing_panel;
pub mod sidebar;
