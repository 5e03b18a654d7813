use anyhow::Result;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::frame_clock::FrameClock;
use engine::input::{Action, InputManager};
use engine::render::CommandBuffer;
use game::characters::{Race, RaceKind, Role};
use game::items::Weapon;
use game::session::Session;

/// Seed for spawn points; override with BRIDGEHACK_SEED
const DEFAULT_SEED: u64 = 0xB51D_6E;

/// Read an optional environment setting, failing on unparsable values
fn env_choice<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting BridgeHack...");

    let seed = env_choice("BRIDGEHACK_SEED", DEFAULT_SEED)?;
    let name = std::env::var("BRIDGEHACK_NAME").unwrap_or_else(|_| "Adventurer".to_string());
    let race = env_choice("BRIDGEHACK_RACE", RaceKind::Human)?;
    let role = env_choice("BRIDGEHACK_ROLE", Role::Warrior)?;

    let mut levels = game::levels::load(seed)?.into_iter();
    let entrance = levels
        .next()
        .ok_or_else(|| anyhow::anyhow!("No dungeon levels available"))?;
    let mut session = Session::new(&name, Race::new(race, role), entrance, levels.collect());
    session.equip_starting_weapon(Weapon::Sword);

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("BridgeHack")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut clock = FrameClock::new();
    let mut input = InputManager::new();
    let mut frame = CommandBuffer::new();
    let mut last_status = String::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!(
                    "Close requested, shutting down after {} frames ({} ticks)",
                    clock.frame_count(),
                    clock.tick_count()
                );
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => input.reset(),
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => input.process_keyboard_event(&event),
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let state = input.state();
                if state.just_pressed(Action::Quit) {
                    info!(
                        "Quit requested, shutting down after {} frames ({} ticks)",
                        clock.frame_count(),
                        clock.tick_count()
                    );
                    elwt.exit();
                    return;
                }
                if state.just_pressed(Action::Pause) {
                    clock.toggle_pause();
                }

                let ticks = clock.begin_frame();
                if !clock.is_paused() {
                    session.handle_input(state);
                }
                for _ in 0..ticks {
                    session.tick(clock.tick_delta());
                }
                input.end_frame();

                frame.clear();
                session.render(&mut frame);

                // No presentation backend yet: surface the status line in the title
                let status = format!(
                    "Level {} - slot {} - {}",
                    session.depth() + 1,
                    session.selected_slot(),
                    session.player().status()
                );
                if status != last_status {
                    window.set_title(&format!("BridgeHack - {}", status));
                    last_status = status;
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
