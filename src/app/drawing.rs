use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::constants;

/// Draws the shade buffer to the canvas, scaled up.
pub fn draw_screen(canvas: &mut Canvas<Window>, frame_buffer: &[u8]) -> Result<(), String> {
    for y in 0..constants::GB_HEIGHT {
        for x in 0..constants::GB_WIDTH {
            let shade = frame_buffer[y * constants::GB_WIDTH + x] as usize % 4;
            canvas.set_draw_color(constants::PALETTE[shade]);
            canvas.fill_rect(Rect::new(
                (x as u32 * constants::GB_SCALE_FACTOR) as i32,
                (y as u32 * constants::GB_SCALE_FACTOR) as i32,
                constants::GB_SCALE_FACTOR,
                constants::GB_SCALE_FACTOR,
            ))?;
        }
    }
    Ok(())
}
