pub mod ch_edge;
pub mod ch_graph;
