// Drawing seam between gameplay code and whatever backend presents the frame
//
// Gameplay types only describe what to draw through `DrawContext`. The
// `CommandBuffer` implementation records the calls so a backend (or a test)
// can consume them after the frame has been built.

use glam::{IVec2, Vec4};

/// Half-transparent black used for actor shadows
pub const SHADOW_COLOR: Vec4 = Vec4::new(0.0, 0.0, 0.0, 0.5);

/// Immediate-mode drawing surface
pub trait DrawContext {
    /// Fill the ellipse inscribed in the rectangle at `top_left` with `size`
    fn fill_ellipse(&mut self, top_left: IVec2, size: IVec2, color: Vec4);

    /// Draw one frame of a sprite sheet row with its top-left corner at `top_left`
    fn draw_sprite(&mut self, sheet: &str, animation: &str, frame: usize, top_left: IVec2);

    /// Draw a line of text with its top-left corner at `top_left`
    fn draw_text(&mut self, top_left: IVec2, text: &str);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Ellipse {
        top_left: IVec2,
        size: IVec2,
        color: Vec4,
    },
    Sprite {
        sheet: String,
        animation: String,
        frame: usize,
        top_left: IVec2,
    },
    Text {
        top_left: IVec2,
        text: String,
    },
}

/// Records draw calls in submission order
#[derive(Debug, Default)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text of every recorded text command, in order
    #[allow(dead_code)]
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Drop everything recorded so far (call at the start of a frame)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawContext for CommandBuffer {
    fn fill_ellipse(&mut self, top_left: IVec2, size: IVec2, color: Vec4) {
        self.commands.push(DrawCommand::Ellipse {
            top_left,
            size,
            color,
        });
    }

    fn draw_sprite(&mut self, sheet: &str, animation: &str, frame: usize, top_left: IVec2) {
        self.commands.push(DrawCommand::Sprite {
            sheet: sheet.to_string(),
            animation: animation.to_string(),
            frame,
            top_left,
        });
    }

    fn draw_text(&mut self, top_left: IVec2, text: &str) {
        self.commands.push(DrawCommand::Text {
            top_left,
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_recorded_in_order() {
        let mut buffer = CommandBuffer::new();
        buffer.fill_ellipse(IVec2::new(1, 2), IVec2::new(16, 8), SHADOW_COLOR);
        buffer.draw_sprite("human", "idle", 3, IVec2::new(0, 0));
        buffer.draw_text(IVec2::new(0, 660), "status");

        assert_eq!(buffer.len(), 3);
        assert!(matches!(buffer.commands()[0], DrawCommand::Ellipse { .. }));
        assert!(matches!(
            &buffer.commands()[1],
            DrawCommand::Sprite { frame: 3, .. }
        ));
        assert_eq!(buffer.texts().collect::<Vec<_>>(), vec!["status"]);
    }

    #[test]
    fn test_clear() {
        let mut buffer = CommandBuffer::new();
        buffer.draw_text(IVec2::ZERO, "x");
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
