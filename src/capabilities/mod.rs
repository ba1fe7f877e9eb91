mod delay;

pub use self::delay::{Delay, DelayOperation};

// We use Crux's built-in Render capability directly because it provides
// all necessary functionality for triggering view updates.
pub use crux_core::render::Render;

use crate::app::App;
use crate::event::Event;

pub type AppRender = Render<Event>;
pub type AppDelay = Delay<Event>;

#[derive(crux_core::macros::Effect)]
#[effect(app = "App")]
pub struct Capabilities {
    pub render: Render<Event>,
    pub delay: Delay<Event>,
}
