use mochi::cpu::CpuMode;
use mochi::system::System;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Drains pending SDL events into the joypad.
/// Returns `true` when a quit was requested.
pub fn handle_input(event_pump: &mut EventPump, system: &mut System) -> bool {
    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => {
                println!("Exit requested.");
                return true;
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                // A mapped key press brings a STOPped CPU back
                if system.joypad.key_down(key) && system.cpu.mode() == CpuMode::Stopped {
                    system.cpu.wake();
                }
            }
            Event::KeyUp {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                system.joypad.key_up(key);
            }
            _ => {}
        }
    }
    false
}
