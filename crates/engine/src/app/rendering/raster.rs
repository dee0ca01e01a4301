use super::draw_list::{DrawCommand, DrawList, PixelRect, Rgba};
use super::font::{glyph_advance, glyph_or_fallback, Glyph, GLYPH_WIDTH};

/// Paints every command of `draw_list` into an RGBA8 frame of
/// `width * height` pixels. Anything outside the frame is clipped.
pub(crate) fn rasterize(frame: &mut [u8], width: u32, height: u32, draw_list: &DrawList) {
    if width == 0 || height == 0 {
        return;
    }

    for command in draw_list.commands() {
        match command {
            DrawCommand::Clear(color) => fill_frame(frame, *color),
            DrawCommand::FillRect { rect, color } => {
                fill_rect_clipped(frame, width, height, *rect, *color);
            }
            DrawCommand::OutlineRect {
                rect,
                thickness,
                color,
            } => outline_rect_clipped(frame, width, height, *rect, *thickness, *color),
            DrawCommand::Text {
                x,
                y,
                text,
                color,
                scale,
            } => draw_text_clipped(frame, width, height, *x, *y, text, *color, *scale),
        }
    }
}

fn fill_frame(frame: &mut [u8], color: Rgba) {
    for chunk in frame.chunks_exact_mut(4) {
        chunk.copy_from_slice(&color.0);
    }
}

fn fill_rect_clipped(frame: &mut [u8], width: u32, height: u32, rect: PixelRect, color: Rgba) {
    let start_x = rect.x.max(0);
    let start_y = rect.y.max(0);
    let end_x = rect.right().min(width as i32);
    let end_y = rect.bottom().min(height as i32);
    if end_x <= start_x || end_y <= start_y {
        return;
    }

    for y in start_y..end_y {
        for x in start_x..end_x {
            write_pixel_clipped(frame, width, x, y, color);
        }
    }
}

/// Border drawn inside `rect`, `thickness` pixels wide.
fn outline_rect_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    rect: PixelRect,
    thickness: i32,
    color: Rgba,
) {
    if thickness <= 0 || rect.width <= 0 || rect.height <= 0 {
        return;
    }
    let t = thickness.min(rect.width).min(rect.height);
    let edges = [
        PixelRect::new(rect.x, rect.y, rect.width, t),
        PixelRect::new(rect.x, rect.bottom() - t, rect.width, t),
        PixelRect::new(rect.x, rect.y, t, rect.height),
        PixelRect::new(rect.right() - t, rect.y, t, rect.height),
    ];
    for edge in edges {
        fill_rect_clipped(frame, width, height, edge, color);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_text_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    mut x: i32,
    y: i32,
    text: &str,
    color: Rgba,
    scale: i32,
) {
    let scale = scale.max(1);
    for ch in text.chars() {
        draw_glyph_clipped(frame, width, height, x, y, glyph_or_fallback(ch), color, scale);
        x += glyph_advance(scale);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_glyph_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    glyph: Glyph,
    color: Rgba,
    scale: i32,
) {
    for (row_index, row_bits) in glyph.iter().enumerate() {
        let glyph_y = y + row_index as i32 * scale;
        for col in 0..GLYPH_WIDTH {
            if row_bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                continue;
            }
            let cell = PixelRect::new(x + col * scale, glyph_y, scale, scale);
            fill_rect_clipped(frame, width, height, cell, color);
        }
    }
}

fn write_pixel_clipped(frame: &mut [u8], width: u32, x: i32, y: i32, color: Rgba) {
    if x < 0 || y < 0 || x >= width as i32 {
        return;
    }
    let Some(pixel_offset) = (y as usize)
        .checked_mul(width as usize)
        .and_then(|row| row.checked_add(x as usize))
    else {
        return;
    };
    let Some(byte_offset) = pixel_offset.checked_mul(4) else {
        return;
    };
    let Some(end) = byte_offset.checked_add(4) else {
        return;
    };
    if end > frame.len() {
        return;
    }
    frame[byte_offset..end].copy_from_slice(&color.0);
}
