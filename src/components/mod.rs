pub mod color_palette;
pub mod route_graph;
