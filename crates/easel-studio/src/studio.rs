use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use easel_engine::coords::{Color, Vec2};
use easel_engine::core::{App, AppControl, FrameCtx};
use easel_engine::input::{Key, MouseButton};
use easel_engine::persist::{self, LoadError};
use easel_engine::scene::ShapeKind;
use easel_engine::session::{LoadTicket, Session};
use easel_engine::time::RenderStats;
use log::{error, info, warn};

use crate::config::StudioConfig;

/// Slider units per arrow-key press.
const CHANNEL_STEP: f32 = 10.0;
const SIZE_STEP: f32 = 1.0;

/// A file read running on a worker thread.
struct PendingLoad {
    ticket: LoadTicket,
    rx: Receiver<Result<String, LoadError>>,
}

/// The drawing app: keyboard picks the brush, the left button paints.
pub struct Studio {
    config: StudioConfig,
    session: Session,
    /// Color channel the arrow keys adjust (0 = red, 1 = green, 2 = blue).
    channel: usize,
    pending: Option<PendingLoad>,
    /// Title last pushed to the window.
    title: String,
}

impl Studio {
    pub fn new(config: StudioConfig) -> Self {
        let session = Session::new(config.load_policy);
        Self {
            config,
            session,
            channel: 0,
            pending: None,
            title: String::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Applies one key binding.
    pub fn handle_key(&mut self, key: Key) -> AppControl {
        let brush = &mut self.session.brush;
        match key {
            Key::P => brush.kind = ShapeKind::Point,
            Key::T => brush.kind = ShapeKind::Triangle,
            Key::C => brush.kind = ShapeKind::Circle,

            Key::R => brush.color = Color::RED,
            Key::G => brush.color = Color::GREEN,
            Key::W => brush.color = Color::WHITE,

            Key::Digit1 | Key::Digit2 | Key::Digit3 => {
                if let Some(d) = key.digit() {
                    self.channel = usize::from(d) - 1;
                }
            }
            Key::ArrowUp => {
                brush.adjust_channel(self.channel, CHANNEL_STEP);
            }
            Key::ArrowDown => {
                brush.adjust_channel(self.channel, -CHANNEL_STEP);
            }

            Key::BracketLeft => brush.adjust_size(-SIZE_STEP),
            Key::BracketRight => brush.adjust_size(SIZE_STEP),
            Key::Minus => brush.adjust_segments(-1),
            Key::Equal => brush.adjust_segments(1),

            Key::X => self.session.clear(),
            Key::M => self.session.paint_landscape(),
            Key::S => self.save(),
            Key::L => self.start_load(),

            Key::Escape => return AppControl::Exit,
            _ => {}
        }
        AppControl::Continue
    }

    fn save(&self) {
        match self.session.save_to(&self.config.save_path) {
            Ok(()) => {}
            Err(e) => error!("save failed: {e:#}"),
        }
    }

    /// Empties the scene and reads the save file off the UI thread.
    fn start_load(&mut self) {
        let ticket = match self.session.begin_load() {
            Ok(t) => t,
            Err(e) => {
                warn!("{e}");
                return;
            }
        };

        let (tx, rx) = mpsc::channel();
        let path = self.config.save_path.clone();
        info!("loading {}", path.display());

        let spawned = thread::Builder::new()
            .name("easel-load".to_string())
            .spawn(move || {
                // The receiver may be gone if the window closed first.
                let _ = tx.send(persist::read_save_text(&path));
            });

        match spawned {
            Ok(_) => self.pending = Some(PendingLoad { ticket, rx }),
            Err(e) => self.session.cancel_load(ticket, &LoadError::Io(e)),
        }
    }

    /// Finishes a pending load if its contents have arrived.
    pub fn poll_load(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        match pending.rx.try_recv() {
            Ok(Ok(text)) => {
                // Failures are already logged by the session.
                let _ = self.session.finish_load(pending.ticket, &text);
            }
            Ok(Err(e)) => self.session.cancel_load(pending.ticket, &e),
            Err(TryRecvError::Empty) => self.pending = Some(pending),
            Err(TryRecvError::Disconnected) => {
                let e = LoadError::Io(std::io::Error::other("load thread exited without a result"));
                self.session.cancel_load(pending.ticket, &e);
            }
        }
    }

    /// Title for the latest canvas redraw, or `None` if the window already shows it.
    fn refresh_title(&mut self, stats: RenderStats) -> Option<&str> {
        let title = format!("{} - {stats}", self.config.title);
        if title == self.title {
            return None;
        }
        self.title = title;
        Some(self.title.as_str())
    }

    fn stroke_at(&mut self, ndc: Vec2) {
        self.session.stroke(ndc);
    }
}

impl App for Studio {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.poll_load();

        let frame = ctx.input_frame;
        for key in frame.key_hits() {
            if self.handle_key(key) == AppControl::Exit {
                return AppControl::Exit;
            }
        }

        // Press paints once; drag paints at every reported position.
        if frame.buttons_pressed.contains(&MouseButton::Left) {
            if let Some((x, y)) = ctx.input.pointer_pos {
                self.stroke_at(ctx.window.to_ndc(x, y));
            }
        } else if ctx.input.button_down(MouseButton::Left) {
            for m in frame.pointer_moves() {
                self.stroke_at(ctx.window.to_ndc(m.x, m.y));
            }
        }

        let session = &mut self.session;
        let mut stats = None;
        let control = ctx.render(|batch| stats = session.render(batch));

        if let Some(stats) = stats {
            if let Some(title) = self.refresh_title(stats) {
                ctx.window.set_title(title);
            }
        }

        control
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use easel_engine::session::Mode;

    use super::*;

    fn studio() -> Studio {
        Studio::new(StudioConfig::default())
    }

    fn scratch_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("easel-studio-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    fn wait_for_load(s: &mut Studio) {
        for _ in 0..200 {
            s.poll_load();
            if !s.session().is_loading() {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("load did not finish");
    }

    #[test]
    fn shape_and_color_keys() {
        let mut s = studio();
        s.handle_key(Key::C);
        s.handle_key(Key::G);
        assert_eq!(s.session().brush.kind, ShapeKind::Circle);
        assert_eq!(s.session().brush.color, Color::GREEN);

        s.handle_key(Key::T);
        s.handle_key(Key::R);
        assert_eq!(s.session().brush.kind, ShapeKind::Triangle);
        assert_eq!(s.session().brush.color, Color::RED);
    }

    #[test]
    fn arrows_adjust_selected_channel() {
        let mut s = studio();
        s.handle_key(Key::R);
        s.handle_key(Key::Digit3);
        s.handle_key(Key::ArrowUp);
        s.handle_key(Key::ArrowUp);
        s.handle_key(Key::Digit1);
        s.handle_key(Key::ArrowDown);

        let c = s.session().brush.color;
        assert!((c.b - 0.2).abs() < 1e-6);
        assert!((c.r - 0.9).abs() < 1e-6);
    }

    #[test]
    fn size_and_segments_keys() {
        let mut s = studio();
        s.handle_key(Key::BracketRight);
        assert_eq!(s.session().brush.size, 6.0);

        for _ in 0..10 {
            s.handle_key(Key::Minus);
        }
        assert_eq!(s.session().brush.segments, 3);
        s.handle_key(Key::Equal);
        assert_eq!(s.session().brush.segments, 4);
    }

    #[test]
    fn mode_keys_and_escape() {
        let mut s = studio();
        s.stroke_at(Vec2::zero());
        s.handle_key(Key::M);
        assert_eq!(s.session().mode(), Mode::Landscape);
        assert!(s.session().scene().is_empty());

        s.stroke_at(Vec2::zero());
        s.handle_key(Key::X);
        assert!(s.session().scene().is_empty());
        assert_eq!(s.session().mode(), Mode::Canvas);

        assert_eq!(s.handle_key(Key::Escape), AppControl::Exit);
        assert_eq!(s.handle_key(Key::Q), AppControl::Continue);
    }

    #[test]
    fn title_follows_every_redraw() {
        let mut s = studio();
        let first = RenderStats::new(1, Duration::from_millis(4));
        let second = RenderStats::new(2, Duration::from_millis(4));

        assert_eq!(s.refresh_title(first), Some("easel - numdot: 1 ms: 4 fps: 250"));
        assert_eq!(s.refresh_title(first), None);
        assert_eq!(s.refresh_title(second), Some("easel - numdot: 2 ms: 4 fps: 250"));
    }

    #[test]
    fn save_then_load_restores_scene() {
        let path = scratch_file("round_trip.json");
        let config = StudioConfig {
            save_path: path.clone(),
            ..StudioConfig::default()
        };

        let mut s = Studio::new(config.clone());
        s.handle_key(Key::C);
        s.stroke_at(Vec2::new(0.25, -0.25));
        s.handle_key(Key::P);
        s.stroke_at(Vec2::new(-0.5, 0.5));
        s.handle_key(Key::S);

        let mut fresh = Studio::new(config);
        fresh.handle_key(Key::L);
        wait_for_load(&mut fresh);

        assert_eq!(fresh.session().scene(), s.session().scene());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn load_of_missing_file_leaves_empty_scene() {
        let config = StudioConfig {
            save_path: scratch_file("does_not_exist.json"),
            ..StudioConfig::default()
        };
        let mut s = Studio::new(config);
        s.stroke_at(Vec2::zero());

        s.handle_key(Key::L);
        assert!(s.session().scene().is_empty());
        wait_for_load(&mut s);
        assert!(s.session().scene().is_empty());
    }
}
