mod id_strategy;

pub use id_strategy::IdStrategy;
