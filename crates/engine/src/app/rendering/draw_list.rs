#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);
    pub const BLACK: Rgba = Rgba([0, 0, 0, 255]);
    pub const RED: Rgba = Rgba([255, 0, 0, 255]);
    pub const GREEN: Rgba = Rgba([0, 255, 0, 255]);
    pub const BLUE: Rgba = Rgba([0, 0, 255, 255]);
    pub const YELLOW: Rgba = Rgba([255, 255, 0, 255]);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }
}

/// Screen-space rectangle; `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Rgba),
    FillRect {
        rect: PixelRect,
        color: Rgba,
    },
    OutlineRect {
        rect: PixelRect,
        thickness: i32,
        color: Rgba,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        color: Rgba,
        scale: i32,
    },
}

/// Ordered presentation commands for one frame. Later commands paint over
/// earlier ones.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Clear(color));
    }

    pub fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    pub fn outline_rect(&mut self, rect: PixelRect, thickness: i32, color: Rgba) {
        self.commands.push(DrawCommand::OutlineRect {
            rect,
            thickness,
            color,
        });
    }

    pub fn text(&mut self, x: i32, y: i32, text: impl Into<String>, color: Rgba, scale: i32) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.into(),
            color,
            scale,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub(crate) fn clear_commands(&mut self) {
        self.commands.clear();
    }
}
