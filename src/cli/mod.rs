pub mod model_counts;
