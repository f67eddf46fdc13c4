/// Use cases module containing application orchestration
mod build_graph;

pub use build_graph::BuildGraphUseCase;
