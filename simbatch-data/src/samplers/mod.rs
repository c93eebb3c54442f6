pub mod traits;
pub mod multi_shot_sampler;
pub mod single_shot_sampler;

pub use traits::BatchSampler;
pub use multi_shot_sampler::MultiShotSampler;
pub use single_shot_sampler::SingleShotSampler;
