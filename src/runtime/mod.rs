pub mod controller;
pub mod effects;
pub mod event_loop;
pub mod next;

pub use controller::Controller;
pub use effects::{Dispatch, EffectRouter, UiAction};
pub use event_loop::EventLoop;
pub use next::{First, Logic, Next};
