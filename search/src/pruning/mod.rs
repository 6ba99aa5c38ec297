mod mate_distance;

pub use mate_distance::mate_distance_prune;
