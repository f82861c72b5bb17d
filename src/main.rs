use anyhow::Result;
use log::info;

use paddle_arena::{ArenaConfig, PaddleGame, Side};

/// Simulated frame rate of the headless host
const FRAME_TIME: f32 = 1.0 / 60.0;

/// Length of the scripted rally (seconds)
const RALLY_SECONDS: f32 = 20.0;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Paddle Arena (headless)...");

    let mut game = PaddleGame::initialize(ArenaConfig::default())?;
    game.launch_ball();

    let frames = (RALLY_SECONDS / FRAME_TIME) as u32;
    for frame in 0..frames {
        // Each paddle chases the ball, the right one a little lazily
        let snapshot = game.object_positions();
        let ball = snapshot.ball();
        for (side, paddle, gain) in [
            (Side::Left, snapshot.paddle_left(), 0.02),
            (Side::Right, snapshot.paddle_right(), 0.01),
        ] {
            let amount = ((ball.y - paddle.y) * gain).clamp(-1.0, 1.0);
            game.move_paddle(side, amount);
        }

        game.update(FRAME_TIME);

        if frame % 300 == 0 {
            let snapshot = game.object_positions();
            info!(
                "t = {:>5.1}s  positions {:?}",
                frame as f32 * FRAME_TIME,
                snapshot.as_floats()
            );
        }
    }

    info!(
        "Final score: {} - {} after {} steps",
        game.player_one_score(),
        game.player_two_score(),
        game.step_count()
    );

    Ok(())
}
