use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::{Duration, Instant};

use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use schip_core::{Machine, Variant};
use schip_display::{keymap, Display};

/// Load the ROM and drive the machine until the window closes.
///
/// The loop owns the cadence: events are pumped and the keypad refreshed
/// before every cycle, and a frame is rendered whenever the machine reports
/// one, so a parked key-wait always sees current input.
pub fn run(rom: &Path, variant: Variant, scale: u32, rate: u64) {
    let mut machine = Machine::new(variant);

    let file = File::open(rom)
        .unwrap_or_else(|err| crate::fatal(&format!("cannot open ROM {}: {}", rom.display(), err)));
    let mut reader = BufReader::new(file);
    match machine.load_rom(&mut reader) {
        Ok(loaded) => info!("loaded {} byte ROM from {}", loaded, rom.display()),
        Err(err) => crate::fatal(&format!("cannot read ROM {}: {}", rom.display(), err)),
    }

    let sdl = sdl2::init().unwrap();
    let mut display = Display::new(&sdl, scale);
    let mut events = sdl.event_pump().unwrap();

    let cycle_time = Duration::from_nanos(1_000_000_000 / rate.max(1));
    let mut last_cycle = Instant::now();

    'event: loop {
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
                    if let Some(code) = keymap(key) {
                        machine.key_press(code);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(code) = keymap(key) {
                        machine.key_release(code);
                    }
                }
                _ => {}
            }
        }

        machine.cycle();

        if let Some(frame) = machine.frame() {
            display.render(frame);
        }

        let elapsed = last_cycle.elapsed();
        if cycle_time > elapsed {
            std::thread::sleep(cycle_time - elapsed);
        }
        last_cycle = Instant::now();
    }

    info!("quit");
}
