mod dependency_graph_builder;

pub use dependency_graph_builder::DependencyGraphBuilder;
