pub mod scripted_driver;
pub mod stub_pipeline;

pub use scripted_driver::{Answer, ScriptedDriver};
pub use stub_pipeline::StubPipeline;
