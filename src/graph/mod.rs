pub mod node;
pub mod primitive;
pub mod scene_graph;
