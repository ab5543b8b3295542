// Readiness scoring pipeline.
// Every function here is pure and total: missing inputs degrade to zero
// contributions, nothing returns an error.

pub mod benchmarks;
pub mod coding;
pub mod composite;
pub mod demand;
pub mod gaps;
pub mod industry;
pub mod linkedin;
pub mod pipeline;
pub mod recommendations;
pub mod resume;
pub mod roadmap;
pub mod skills;
