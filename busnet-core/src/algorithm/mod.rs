pub mod shortest_path;
