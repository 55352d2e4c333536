use std::process::ExitCode;

use anyhow::Context;
use log::{error, info};
use tumble::prelude::*;

fn run(config: &DemoConfig) -> anyhow::Result<()> {
    let mut window = Window::create(&config.title, config.width, config.height)
        .context("failed to initialize the window and renderer")?;

    let mut renderer = SoftwareRenderer::new(window.width(), window.height());
    init_graphics(&mut renderer, config.clear_color);

    let scene = Scene::demo(config);
    let report = FrameLoop::new(config.frame_pacer())
        .run(&mut window, &mut renderer, &scene)
        .context("frame loop stopped")?;

    info!(
        "quit after {} frames (angles {:.0}°, {:.0}°)",
        report.frames, report.animation.angle_x, report.animation.angle_y
    );
    Ok(())
}

/// Logs a fatal error once and maps the outcome to a process status.
fn exit_status(outcome: anyhow::Result<()>) -> u8 {
    match outcome {
        Ok(()) => 0,
        Err(err) => {
            error!("{err:#}");
            1
        }
    }
}

fn main() -> ExitCode {
    let config = DemoConfig::default();
    init_logging(config.logging.clone());

    ExitCode::from(exit_status(run(&config)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_failure_exits_non_zero() {
        assert_eq!(exit_status(Ok(())), 0);

        let err = anyhow::Error::new(Error::Platform("no display".into()))
            .context("failed to initialize the window and renderer");
        assert_eq!(exit_status(Err(err)), 1);
    }
}
