pub mod graph_api;
pub mod messenger;
