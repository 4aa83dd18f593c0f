use glam::Vec2;
use hecs::World;
use image::{Rgba, RgbaImage};
use paddle_core::*;
use std::path::Path;

const SKIN: Rgba<u8> = Rgba([240, 240, 240, 255]);
const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn write_skin(path: &Path) {
    RgbaImage::from_pixel(25, 100, SKIN).save(path).unwrap();
}

fn test_config(dir: &Path) -> Config {
    let skin = dir.join("player_one.png");
    write_skin(&skin);
    let toml = format!(
        "display_width = 640.0\nlogical_camera_width = 640.0\nplayer_one_skin = {:?}\n",
        skin.to_string_lossy()
    );
    let path = dir.join("paddle.toml");
    std::fs::write(&path, toml).unwrap();
    Config::from_file(&path).unwrap()
}

#[test]
fn test_frame_moves_and_draws() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let mut paddle = Paddle::player_one(&config).unwrap();
    let mut frame = FrameBuffer::new(200, 400);
    frame.clear(BACKGROUND);

    let mut keys = KeyState::new();
    keys.handle_key_down("ArrowDown");
    run_frame(&mut paddle, &keys, &mut frame, &config, 0);

    assert_eq!(paddle.position(), Vec2::new(10.0, 20.0));
    let image = frame.image();
    assert_eq!(*image.get_pixel(10, 20), SKIN, "Top-left of paddle");
    assert_eq!(*image.get_pixel(34, 119), SKIN, "Bottom-right of paddle");
    assert_eq!(*image.get_pixel(10, 19), BACKGROUND, "Above paddle");
    assert_eq!(*image.get_pixel(35, 20), BACKGROUND, "Right of paddle");
}

#[test]
fn test_held_key_over_several_frames() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let settings = PaddleSettings {
        position: Vec2::new(10.0, 300.0),
        ..PaddleSettings::default()
    };
    let mut paddle = Paddle::load(settings, &config).unwrap();
    let mut frame = FrameBuffer::new(64, 64);

    let mut keys = KeyState::new();
    keys.handle_key_down("w");
    for _ in 0..5 {
        run_frame(&mut paddle, &keys, &mut frame, &config, 2);
    }
    assert_eq!(paddle.position().y, 240.0, "5 frames of (10 + 2) up");

    keys.handle_key_up("W");
    run_frame(&mut paddle, &keys, &mut frame, &config, 2);
    assert_eq!(paddle.position().y, 240.0, "Released key stops the paddle");
}

#[test]
fn test_scaled_display_caps_at_2000() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(dir.path());
    config.display_width = 800.0;
    config.logical_camera_width = 400.0;

    let settings = PaddleSettings {
        position: Vec2::new(10.0, 1900.0),
        ..PaddleSettings::default()
    };
    let mut paddle = Paddle::load(settings, &config).unwrap();
    let mut frame = FrameBuffer::new(64, 64);

    paddle.update(&mut frame, &config);
    assert_eq!(paddle.position().y, 2000.0);
}

#[test]
fn test_missing_skin_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        player_one_skin: dir.path().join("missing.png"),
        ..Config::default()
    };

    let error = Paddle::player_one(&config).unwrap_err();
    assert_eq!(error.path, dir.path().join("missing.png"));
}

#[test]
fn test_two_player_world() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let right_skin = dir.path().join("player_two.png");
    write_skin(&right_skin);

    let mut world = World::new();
    let left = create_paddle(
        &mut world,
        PlayerSlot(0),
        Paddle::player_one(&config).unwrap(),
    );
    let right = create_paddle(
        &mut world,
        PlayerSlot(1),
        Paddle::load(
            PaddleSettings {
                position: Vec2::new(160.0, 10.0),
                skin: Some(right_skin),
                ..PaddleSettings::default()
            },
            &config,
        )
        .unwrap(),
    );

    let up = KeyState {
        up: true,
        down: false,
    };
    let down = KeyState {
        up: false,
        down: true,
    };
    let mut frame = FrameBuffer::new(200, 200);

    move_paddles(&mut world, PlayerSlot(0), &down, 0);
    move_paddles(&mut world, PlayerSlot(1), &up, 5);
    update_paddles(&mut world, &mut frame, &config);

    assert_eq!(world.get::<&Paddle>(left).unwrap().position().y, 20.0);
    assert_eq!(world.get::<&Paddle>(right).unwrap().position().y, -5.0);

    world.get::<&mut Paddle>(right).unwrap().add_point();
    assert_eq!(total_score(&world, PlayerSlot(0)), 0);
    assert_eq!(total_score(&world, PlayerSlot(1)), 1);
}
