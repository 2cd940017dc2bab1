//! Wire models shared with the backend.

mod health;
mod task;
mod user;

pub use health::{HealthInfo, RootInfo};
pub use task::{NewTask, Task, TaskUpdate};
pub use user::{NewUser, User};
