use std::{env, fs, path::Path, thread, time::Instant};

mod constants;
mod drawing;
mod input;
mod sdl_setup;

use mochi::system::System;

fn main() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <rom_path>", args[0]);
        std::process::exit(1);
    }
    let rom_path = Path::new(&args[1]);
    let rom_filename = rom_path.file_name().unwrap_or_default().to_string_lossy();
    let window_title = format!("mochi - {}", rom_filename);

    let mut sdl_context = sdl_setup::init_sdl(&window_title)?;

    println!("Loading ROM: {}", rom_path.display());
    let rom_data = fs::read(rom_path)
        .map_err(|e| format!("failed to read ROM '{}': {}", rom_path.display(), e))?;
    let mut system = System::with_rom(&rom_data)?;
    println!("ROM loaded ({} bytes)", system.bus.rom_len());

    println!("Starting main loop...");
    'main_loop: loop {
        let frame_start_time = Instant::now();

        // 1. Drain host events
        if input::handle_input(&mut sdl_context.event_pump, &mut system) {
            break 'main_loop;
        }

        // 2. Emulate one frame's worth of cycles
        if let Err(e) = system.run_frame() {
            eprintln!("Emulator error: {}", e);
            std::process::exit(1);
        }

        // 3. Rasterize and present
        system.render();
        sdl_context.canvas.set_draw_color(constants::CLEAR_COLOR);
        sdl_context.canvas.clear();
        drawing::draw_screen(&mut sdl_context.canvas, system.ppu.frame_buffer())?;
        sdl_context.canvas.present();

        // 4. Pace to ~60 Hz
        let elapsed_time = frame_start_time.elapsed();
        if elapsed_time < constants::TARGET_FRAME_DURATION {
            thread::sleep(constants::TARGET_FRAME_DURATION - elapsed_time);
        }
    }

    println!("Emulator stopped.");
    Ok(())
}
