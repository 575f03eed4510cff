//! Audio manager - handles audio playback outside of the component render
//! cycle. The one `<audio>` element lives here; everything else observes
//! the session and issues commands through [`PlaybackController`].

mod controller;
mod element;
mod session;

pub use controller::{AudioController, PlaybackController};
pub use session::PlaybackSession;
