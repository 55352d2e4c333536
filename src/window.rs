//! SDL2 window, presentation, and frame pacing.

use std::thread;
use std::time::Duration;

use log::{info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, RendererInfo, Texture, TextureCreator};
use sdl2::video::WindowContext;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
}

/// Where finished frames go and where quit requests come from.
pub trait Surface {
    /// Drains every pending event without blocking.
    fn poll_events(&mut self) -> WindowEvent;

    /// Presents a finished ARGB8888 frame.
    fn swap_buffers(&mut self, frame: &[u8]) -> Result<()>;
}

/// Folds a batch of SDL events into a single [`WindowEvent`].
///
/// A window close or an Escape key press means quit. The whole batch is
/// consumed even after a quit is seen.
pub fn classify_events(events: impl IntoIterator<Item = Event>) -> WindowEvent {
    events
        .into_iter()
        .fold(WindowEvent::None, |result, event| match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => WindowEvent::Quit,
            _ => result,
        })
}

/// Throttles the frame loop to a fixed frame period.
///
/// Frames that finish early sleep for the rest of the period. Frames that
/// overrun are not compensated for: the next frame simply starts late.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    target: Duration,
}

impl FramePacer {
    pub fn new(target: Duration) -> Self {
        Self { target }
    }

    /// `fps == 0` disables pacing.
    pub fn from_fps(fps: u32) -> Self {
        if fps == 0 {
            Self::unthrottled()
        } else {
            Self::new(Duration::from_secs_f64(1.0 / f64::from(fps)))
        }
    }

    pub fn unthrottled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    /// How long to wait after a frame that took `elapsed`, if at all.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.target
            .checked_sub(elapsed)
            .filter(|remaining| !remaining.is_zero())
    }

    /// Sleeps out the rest of the frame period and returns the time slept.
    pub fn pace(&self, elapsed: Duration) -> Duration {
        match self.remaining(elapsed) {
            Some(remaining) => {
                thread::sleep(remaining);
                remaining
            }
            None => Duration::ZERO,
        }
    }
}

/// What the demo needs to know about the SDL renderer behind the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererCaps {
    pub name: String,
    /// 0 means unlimited.
    pub max_texture_width: u32,
    /// 0 means unlimited.
    pub max_texture_height: u32,
    pub texture_formats: Vec<PixelFormatEnum>,
}

impl From<RendererInfo> for RendererCaps {
    fn from(info: RendererInfo) -> Self {
        Self {
            name: info.name.to_string(),
            max_texture_width: info.max_texture_width,
            max_texture_height: info.max_texture_height,
            texture_formats: info.texture_formats,
        }
    }
}

impl RendererCaps {
    /// Checks that a full-window streaming texture can be created.
    ///
    /// A renderer that does not list ARGB8888 natively is still accepted:
    /// SDL converts on upload, at some cost.
    pub fn check(&self, width: u32, height: u32) -> Result<()> {
        let too_small = |max: u32, wanted: u32| max != 0 && max < wanted;
        if too_small(self.max_texture_width, width) || too_small(self.max_texture_height, height) {
            return Err(Error::Unsupported {
                renderer: self.name.clone(),
                reason: format!(
                    "needs a {width}x{height} texture, renderer allows at most {}x{}",
                    self.max_texture_width, self.max_texture_height
                ),
            });
        }

        if !self.texture_formats.is_empty()
            && !self.texture_formats.contains(&PixelFormatEnum::ARGB8888)
        {
            warn!(
                "renderer '{}' has no native ARGB8888 textures; frames will be converted",
                self.name
            );
        }
        Ok(())
    }
}

pub struct Window {
    // Declared first so it drops before the creator it borrows from.
    texture: Texture<'static>,
    _texture_creator: Box<TextureCreator<WindowContext>>,
    canvas: Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    width: u32,
    height: u32,
}

impl Window {
    /// Opens a centered window with a renderer able to present
    /// `width x height` ARGB8888 frames.
    pub fn create(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(Error::Platform)?;
        let video_subsystem = sdl_context.video().map_err(Error::Platform)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| Error::Platform(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| Error::Platform(e.to_string()))?;

        let caps = RendererCaps::from(canvas.info());
        info!(
            "renderer '{}', max texture {}x{}",
            caps.name, caps.max_texture_width, caps.max_texture_height
        );
        caps.check(width, height)?;

        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump().map_err(Error::Platform)?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // The texture field is declared first, so it is dropped before the creator.
        let texture_creator_ref: &'static TextureCreator<WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| Error::Unsupported {
                renderer: caps.name.clone(),
                reason: e.to_string(),
            })?;

        info!("opened '{title}' at {width}x{height}");

        Ok(Self {
            texture,
            _texture_creator: texture_creator,
            canvas,
            event_pump,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Surface for Window {
    fn poll_events(&mut self) -> WindowEvent {
        classify_events(self.event_pump.poll_iter())
    }

    fn swap_buffers(&mut self, frame: &[u8]) -> Result<()> {
        self.texture
            .update(None, frame, (self.width * 4) as usize)
            .map_err(|e| Error::Present(e.to_string()))?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, None)
            .map_err(Error::Present)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn caps(max: u32, formats: Vec<PixelFormatEnum>) -> RendererCaps {
        RendererCaps {
            name: "test".into(),
            max_texture_width: max,
            max_texture_height: max,
            texture_formats: formats,
        }
    }

    fn key_down(keycode: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 1,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn close_and_escape_request_quit() {
        assert_eq!(
            classify_events([Event::Quit { timestamp: 0 }]),
            WindowEvent::Quit
        );
        assert_eq!(
            classify_events([key_down(Keycode::Escape)]),
            WindowEvent::Quit
        );
    }

    #[test]
    fn other_events_do_not_quit() {
        assert_eq!(classify_events(Vec::new()), WindowEvent::None);

        let events = vec![
            key_down(Keycode::A),
            Event::KeyUp {
                timestamp: 0,
                window_id: 1,
                keycode: Some(Keycode::Escape),
                scancode: None,
                keymod: Mod::NOMOD,
                repeat: false,
            },
            Event::Window {
                timestamp: 0,
                window_id: 1,
                win_event: sdl2::event::WindowEvent::FocusGained,
            },
        ];
        assert_eq!(classify_events(events), WindowEvent::None);
    }

    #[test]
    fn quit_still_drains_the_queue() {
        let mut queue = vec![
            key_down(Keycode::A),
            Event::Quit { timestamp: 0 },
            key_down(Keycode::Space),
            key_down(Keycode::Escape),
        ]
        .into_iter();

        assert_eq!(classify_events(&mut queue), WindowEvent::Quit);
        assert!(queue.next().is_none());
    }

    #[test]
    fn pacer_sleeps_only_when_early() {
        let pacer = FramePacer::from_fps(50);
        assert_eq!(pacer.target(), Duration::from_millis(20));
        assert_eq!(
            pacer.remaining(Duration::from_millis(5)),
            Some(Duration::from_millis(15))
        );
        assert_eq!(pacer.remaining(Duration::from_millis(20)), None);
        assert_eq!(pacer.remaining(Duration::from_millis(45)), None);
        assert_eq!(pacer.pace(Duration::from_millis(45)), Duration::ZERO);
    }

    #[test]
    fn zero_fps_is_unthrottled() {
        let pacer = FramePacer::from_fps(0);
        assert_eq!(pacer, FramePacer::unthrottled());
        assert_eq!(pacer.remaining(Duration::ZERO), None);
    }

    #[test]
    fn caps_accept_unlimited_and_large_textures() {
        assert!(caps(0, vec![]).check(512, 512).is_ok());
        assert!(caps(4096, vec![PixelFormatEnum::ARGB8888])
            .check(512, 512)
            .is_ok());
        // Conversion path only warns
        assert!(caps(4096, vec![PixelFormatEnum::RGB24])
            .check(512, 512)
            .is_ok());
    }

    #[test]
    fn caps_reject_small_texture_limit() {
        let err = caps(256, vec![PixelFormatEnum::ARGB8888])
            .check(512, 512)
            .unwrap_err();
        assert!(matches!(err, Error::Unsupported { .. }));
        assert!(err.to_string().contains("512x512"));
    }
}
