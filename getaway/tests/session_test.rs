use approx::assert_relative_eq;
use getaway::config::GameConfig;
use getaway::input::SteerIntent;
use getaway::pursuer::Pursuer;
use getaway::session::LoopState;
use getaway::session::Session;
use getaway::session::TickOutcome;
use std::time::Duration;
use tarmac::fastrand::Rng;
use tarmac::glam::Vec2;
use tarmac::instant::Instant;
use tarmac::renderer::headless::RendererContextHeadless;
use tarmac::renderer::DrawCommand;
use tarmac::window::Coordinates;
use tarmac::window::InputEvent;
use tarmac::window::Key;
use test_log::test;

fn setup() -> (GameConfig, Session, RendererContextHeadless, Instant) {
    let config = GameConfig::default();
    let canvas = RendererContextHeadless::new(Coordinates::new(800, 600)).unwrap();
    let start = Instant::now();
    let session = Session::new(&config, Vec2::new(800.0, 600.0), start, Rng::with_seed(42)).unwrap();

    (config, session, canvas, start)
}

fn fill_colors(canvas: &RendererContextHeadless) -> Vec<tarmac::glam::Vec4> {
    canvas
        .commands
        .iter()
        .filter_map(|p| match p {
            DrawCommand::FillRect { color, .. } => Some(*color),
            _ => None,
        })
        .collect()
}

#[test]
fn first_tick_moves_player_up() {
    let (_, mut session, mut canvas, start) = setup();

    assert_eq!(session.tick(&mut canvas, start + Duration::from_millis(16)), TickOutcome::Running);

    assert_relative_eq!(session.player.position.x, 0.0);
    assert_relative_eq!(session.player.position.y, -4.0);
    assert_eq!(session.player.heading, 0.0);
    assert_eq!(canvas.commands.first(), Some(&DrawCommand::Clear));
}

#[test]
fn left_key_turns_player() {
    let (_, mut session, mut canvas, start) = setup();

    session.handle_input(InputEvent::KeyPress { key: Key::ArrowLeft, repeat: false });
    session.tick(&mut canvas, start + Duration::from_millis(16));

    assert_eq!(session.intent, SteerIntent { left: true, right: false });
    assert_eq!(session.player.heading, -3.0);

    session.handle_input(InputEvent::KeyRelease { key: Key::ArrowLeft });
    session.tick(&mut canvas, start + Duration::from_millis(32));

    assert_eq!(session.player.heading, -3.0);
}

#[test]
fn camera_trails_player() {
    let (config, mut session, mut canvas, start) = setup();

    session.tick(&mut canvas, start + Duration::from_millis(16));

    assert_relative_eq!(session.camera.position.x, 0.0);
    assert_relative_eq!(session.camera.position.y, -4.0 * config.camera_smoothing);

    // No spawns before the first interval elapses
    for _ in 0..500 {
        session.tick(&mut canvas, start);
        assert!(session.camera.position.y >= session.player.position.y);
    }
}

#[test]
fn pursuer_spawns_after_interval() {
    let (config, mut session, mut canvas, start) = setup();

    session.tick(&mut canvas, start + Duration::from_millis(1990));
    assert!(session.pursuers.is_empty());

    let origin = session.player.position;
    session.tick(&mut canvas, start + Duration::from_millis(2000));

    assert_eq!(session.pursuers.len(), 1);

    // Spawned around the previous position, then moved once
    let distance = session.pursuers[0].position.distance(origin);
    assert!((distance - config.spawn_distance).abs() <= config.pursuer.speed + 0.01, "distance {}", distance);
}

#[test]
fn render_order_is_player_then_pursuers() {
    let (config, mut session, mut canvas, start) = setup();
    let mut second = config.pursuer.clone();
    second.color = tarmac::glam::Vec4::new(0.0, 1.0, 0.0, 1.0);

    session.pursuers.push(Pursuer::new_at_angle(Vec2::ZERO, 400.0, 0.0, &config.pursuer));
    session.pursuers.push(Pursuer::new_at_angle(Vec2::ZERO, 400.0, 3.0, &second));
    session.tick(&mut canvas, start + Duration::from_millis(16));

    assert_eq!(
        fill_colors(&canvas),
        vec![config.player.color, config.window_color, config.pursuer.color, config.window_color, second.color, config.window_color]
    );
}

#[test]
fn distant_pursuers_are_culled_without_skipping() {
    let (config, mut session, mut canvas, start) = setup();

    // Neighbours of a culled pursuer must still be kept
    session.pursuers.push(Pursuer::new_at_angle(Vec2::ZERO, 1500.0, 0.0, &config.pursuer));
    session.pursuers.push(Pursuer::new_at_angle(Vec2::ZERO, 1500.0, 1.0, &config.pursuer));
    session.pursuers.push(Pursuer::new_at_angle(Vec2::ZERO, 500.0, 2.0, &config.pursuer));
    session.pursuers.push(Pursuer::new_at_angle(Vec2::ZERO, 1500.0, 3.0, &config.pursuer));
    session.pursuers.push(Pursuer::new_at_angle(Vec2::ZERO, 600.0, 4.0, &config.pursuer));
    session.tick(&mut canvas, start + Duration::from_millis(16));

    assert_eq!(session.pursuers.len(), 2);
    assert!(session.pursuers.iter().all(|p| p.position.distance(session.player.position) <= config.cull_distance));

    // Culled pursuers are still drawn in the frame they leave
    assert_eq!(canvas.fill_count(), 12);

    session.tick(&mut canvas, start + Duration::from_millis(32));
    assert_eq!(canvas.fill_count(), 6);
}

#[test]
fn simultaneous_catches_end_session_once() {
    let (config, mut session, mut canvas, start) = setup();

    session.pursuers.push(Pursuer::new_at_angle(Vec2::new(10.0, 0.0), 0.0, 0.0, &config.pursuer));
    session.pursuers.push(Pursuer::new_at_angle(Vec2::new(-10.0, 0.0), 0.0, 0.0, &config.pursuer));

    assert_eq!(session.tick(&mut canvas, start + Duration::from_millis(16)), TickOutcome::Caught { pursuers: 2 });
    assert_eq!(session.state(), LoopState::Stopped);
    assert!(!session.is_running());
    assert!(session.spawner.interval.is_cancelled());

    let player = session.player.clone();
    let pursuers = session.pursuers.clone();
    let frames = canvas.frames;

    for i in 1..10 {
        session.handle_input(InputEvent::KeyPress { key: Key::ArrowRight, repeat: false });
        assert_eq!(session.tick(&mut canvas, start + Duration::from_secs(10 * i)), TickOutcome::Stopped);
    }

    assert_eq!(session.player, player);
    assert_eq!(session.pursuers, pursuers);
    assert_eq!(canvas.frames, frames);
    assert_eq!(session.ticks(), 1);
}

#[test]
fn invalid_smoothing_rejects_session() {
    let mut config = GameConfig::default();
    config.camera_smoothing = 1.0;

    assert!(Session::new(&config, Vec2::new(800.0, 600.0), Instant::now(), Rng::with_seed(0)).is_err());
}

#[test]
fn touch_uses_viewport_halves() {
    let (_, mut session, _, _) = setup();

    session.set_viewport(Vec2::new(1000.0, 500.0));
    session.handle_input(InputEvent::TouchStart { id: 0, position: Coordinates::new(450, 100) });
    assert_eq!(session.intent, SteerIntent { left: true, right: false });

    session.handle_input(InputEvent::TouchEnd { id: 0, position: Coordinates::new(450, 100) });
    session.handle_input(InputEvent::TouchStart { id: 0, position: Coordinates::new(550, 100) });
    assert_eq!(session.intent, SteerIntent { left: false, right: true });
}
