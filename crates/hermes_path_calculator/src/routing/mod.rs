pub mod bidirectional_dijkstra;
pub mod ch_bidirectional_dijkstra;
pub mod dijkstra;
pub(crate) mod node_data;
pub mod routing_algorithm;
pub mod routing_path;
pub(crate) mod routing_path_builder;
pub(crate) mod search_direction;
