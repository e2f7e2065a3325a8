//! WakeGuard - Main Entry Point

use alerting::SilentPlayer;
use face_stream::{Observation, ScriptedSource};
use session::{init_logging, MonitorSession, SessionCommand, SessionConfig};
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== WakeGuard v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting drowsiness monitoring session...");

    let config = SessionConfig::load()?;
    let runtime_s = 5;

    // Replay a recorded drowsy-driver sequence against the monitor. A
    // camera-backed source plugs in through the same FaceSource trait.
    let mut session = MonitorSession::new(
        config,
        ScriptedSource::new(demo_frames()),
        SilentPlayer::default(),
    );

    let (commands, rx) = mpsc::channel(8);
    let stopper = tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_secs(runtime_s)).await;
        let _ = commands.send(SessionCommand::Stop).await;
    });

    session.run(rx).await;
    stopper.await?;

    Ok(())
}

/// Alert drill: attentive driving, a long eyes-closed spell, then recovery.
fn demo_frames() -> Vec<Observation> {
    let mut frames = Vec::new();

    for i in 0..10 {
        frames.push(Observation::face(i * 100, 0.95, 0.9));
    }
    for i in 10..35 {
        frames.push(Observation::face(i * 100, 0.05, 0.08));
    }
    for i in 35..40 {
        frames.push(Observation::face(i * 100, 0.9, 0.9));
    }

    frames
}
