mod eight_ball;
mod flip;
mod roll;

pub use eight_ball::execute as eight_ball;
pub use flip::execute as flip;
pub use roll::execute as roll;
