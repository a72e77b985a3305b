mod engine;
mod report;

pub use engine::{glide_steps, CycleReport, Jiggler, JigglerState};
pub use report::{status_line, write_banner, Outcome, FAREWELL};
