pub mod noise;
pub mod sentiment;

pub use noise::{laplace_from_uniform, NoiseSource, ThreadNoise};
pub use sentiment::{ISentimentModel, Sentiment};
