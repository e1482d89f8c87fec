pub mod watch;

use glance_core::render::Screen;
use ssd1306::FrameBuffer;

pub trait FrameRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut FrameBuffer);
}
