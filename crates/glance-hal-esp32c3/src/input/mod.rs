pub mod button;

pub use button::WakeButton;
