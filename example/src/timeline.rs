//! The scripted session: spin, run progress to completion, reset, stop.
//!
//! The view lives on a single task. The script runs on another task and only
//! talks to it through a channel, the same way background work hands updates
//! back to a UI thread.

use std::time::Duration;

use anyhow::Result;
use tessera_circular_progress::{CircularProgressView, CircularState, LifecycleEvent, LifecycleHub};
use tokio::{sync::mpsc, time::sleep};
use tracing::info;

use crate::{
    config::{DemoConfig, Timing},
    host::{TracingAnimator, TracingRenderer},
};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const PROGRESS_STEPS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    StartSpin,
    StopSpin,
    State(CircularState),
    Progress(f64),
    Highlight(bool),
}

pub async fn script(tx: mpsc::Sender<Command>, hub: LifecycleHub, timing: Timing) -> Result<()> {
    tx.send(Command::StartSpin).await?;
    tx.send(Command::State(CircularState::StopSpinning)).await?;

    sleep(timing.spin() / 2).await;
    // A host that was backgrounded drops running animations.
    hub.emit(LifecycleEvent::WillEnterForeground);
    sleep(timing.spin() / 2).await;

    tx.send(Command::State(CircularState::StopProgress)).await?;
    // One step past 100% exercises the clamp.
    for step in 1..=PROGRESS_STEPS + 1 {
        tx.send(Command::Progress(f64::from(step) / f64::from(PROGRESS_STEPS)))
            .await?;
        if step == PROGRESS_STEPS {
            tx.send(Command::State(CircularState::Completed)).await?;
        }
        sleep(timing.step()).await;
    }

    tx.send(Command::Highlight(true)).await?;
    sleep(timing.reset()).await;
    tx.send(Command::Highlight(false)).await?;
    tx.send(Command::Progress(0.0)).await?;

    sleep(timing.stop().saturating_sub(timing.reset())).await;
    tx.send(Command::State(CircularState::Stop)).await?;
    tx.send(Command::StopSpin).await?;
    Ok(())
}

fn apply(view: &mut CircularProgressView<TracingRenderer, TracingAnimator>, command: Command) {
    match command {
        Command::StartSpin => view.start_spin(),
        Command::StopSpin => view.stop_spin(),
        Command::State(state) => {
            info!(?state, "state");
            view.set_state(state);
        }
        Command::Progress(progress) => view.set_progress(progress),
        Command::Highlight(highlighted) => view.set_highlighted(highlighted),
    }
}

pub async fn run(config: DemoConfig) -> Result<()> {
    let hub = LifecycleHub::new();
    let mut view = CircularProgressView::new(
        config.args,
        TracingRenderer::default(),
        TracingAnimator::default(),
    );
    view.attach_lifecycle(&hub);

    let (tx, mut rx) = mpsc::channel(32);
    let script = tokio::spawn(script(tx, hub, config.timing));

    let mut frame = tokio::time::interval(FRAME_INTERVAL);
    loop {
        tokio::select! {
            command = rx.recv() => match command {
                Some(command) => apply(&mut view, command),
                None => break,
            },
            _ = frame.tick() => {
                view.process_lifecycle_events();
                view.draw_if_needed();
            }
        }
    }
    view.draw_if_needed();
    view.detach_lifecycle();

    script.await??;
    info!(
        frames = view.renderer().frames(),
        running_animations = view.animator().running(),
        state = ?view.state(),
        "session finished"
    );
    Ok(())
}
