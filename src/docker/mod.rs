pub mod engine;
pub mod mount;

pub use engine::DockerCli;
pub use mount::Mount;
