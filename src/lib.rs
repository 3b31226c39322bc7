pub mod arenal;
pub mod capture;
pub mod config;
pub mod geometry;
pub mod infrastructure;
pub mod logging;
pub mod nodes;
pub mod overlay;
pub mod render;
pub mod result;
pub mod selection;
pub mod types;
