pub mod disabled;
pub mod relay;
pub mod render;
pub mod transport;

pub use disabled::DisabledMailer;
pub use relay::HttpRelayMailer;
pub use render::render_notification;
pub use transport::{EmailMessage, EmailOutcome, EmailTransport};
