use std::error::Error;
use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use emu8_core::constants::FRAME_RATE;
use emu8_core::{Chip8, LogTrace};
use emu8_display::Display;

use crate::keymap::keymap;
use crate::Args;

pub fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut chip8 = match args.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    };

    // Load ROM before any window is opened
    let loaded = chip8.load_rom_file(&args.rom)?;
    tracing::info!("loaded {} bytes from {}", loaded, args.rom.display());

    // Get SDL2 context
    let sdl = sdl2::init()?;
    let mut display = Display::new(&sdl, args.scale)?;
    let mut events = sdl.event_pump()?;

    let frame_time = Duration::from_secs(1) / FRAME_RATE;
    let mut trace = LogTrace;
    let mut buzzing = false;

    'event: loop {
        let frame_start = Instant::now();

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_press(kc)?;
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_release(kc)?;
                    }
                }
                _ => continue,
            };
        }

        // Run this frame's instructions; a stall means nothing more can happen until the tick
        for _ in 0..args.cycles_per_frame {
            match chip8.step_traced(&mut trace) {
                Ok(step) if step.is_stalled() => break,
                Ok(_) => continue,
                Err(err) => {
                    tracing::error!("{err}; stopping");
                    break 'event;
                }
            }
        }
        chip8.tick();

        if chip8.buzzer_active() != buzzing {
            buzzing = !buzzing;
            tracing::debug!(buzzing, "buzzer");
        }

        // If the draw flag is set, unset it and render the current frame
        if let Some(frame) = chip8.take_frame() {
            display.render(frame)?;
        }

        // Handle timing
        let elapsed = frame_start.elapsed();
        if frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
    }

    Ok(())
}
