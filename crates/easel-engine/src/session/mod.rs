//! The application object: one scene, one brush, and the load guard.
//!
//! All mutation goes through `&mut Session`, so there is exactly one writer.
//! Loading is split in two around the file read: [`Session::begin_load`]
//! empties the scene and hands out a [`LoadTicket`]; the scene stays frozen
//! until that ticket is passed to [`Session::finish_load`] or
//! [`Session::cancel_load`].

mod brush;

pub use brush::{Brush, MIN_UI_SEGMENTS, SIZE_TO_NDC, SLIDER_MAX};

use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use log::{debug, error, info, warn};
use thiserror::Error;

use crate::coords::Vec2;
use crate::painter::{Landscape, Painter};
use crate::persist::{self, LoadError, LoadPolicy};
use crate::raster::Rasterizer;
use crate::scene::Scene;
use crate::time::RenderStats;

/// What `render` draws.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Mode {
    /// The user's scene.
    #[default]
    Canvas,
    /// The procedural painter.
    Landscape,
}

/// Ticket ids are unique across every session in the process.
static NEXT_TICKET: AtomicU64 = AtomicU64::new(0);

/// Proof that a load is in flight. Not `Clone`: exactly one completion per load.
#[derive(Debug)]
#[must_use = "a pending load freezes the scene until finished or cancelled"]
pub struct LoadTicket {
    id: u64,
}

/// `begin_load` was called while another load was pending.
#[derive(Debug, Error)]
#[error("a load is already in progress")]
pub struct LoadInFlight;

pub struct Session {
    scene: Scene,
    pub brush: Brush,
    mode: Mode,
    policy: LoadPolicy,
    painter: Box<dyn Painter>,
    pending: Option<u64>,
    last_stats: Option<RenderStats>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(LoadPolicy::default())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("shapes", &self.scene.len())
            .field("brush", &self.brush)
            .field("mode", &self.mode)
            .field("policy", &self.policy)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(policy: LoadPolicy) -> Self {
        Self::with_painter(policy, Box::new(Landscape::new()))
    }

    /// Session whose landscape mode runs `painter`.
    pub fn with_painter(policy: LoadPolicy, painter: Box<dyn Painter>) -> Self {
        Self {
            scene: Scene::new(),
            brush: Brush::default(),
            mode: Mode::Canvas,
            policy,
            painter,
            pending: None,
            last_stats: None,
        }
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Stats of the most recent canvas redraw.
    #[inline]
    pub fn last_stats(&self) -> Option<RenderStats> {
        self.last_stats
    }

    /// Pointer down or drag at `position`.
    ///
    /// Returns `false` if the shape was dropped because a load is pending.
    pub fn stroke(&mut self, position: Vec2) -> bool {
        if self.is_loading() {
            debug!("stroke at {position:?} dropped: load in progress");
            return false;
        }
        self.scene.push(self.brush.shape_at(position));
        self.mode = Mode::Canvas;
        true
    }

    /// Empties the scene and shows the (blank) canvas.
    pub fn clear(&mut self) {
        self.scene.clear();
        self.mode = Mode::Canvas;
    }

    pub fn paint_landscape(&mut self) {
        self.scene.clear();
        self.mode = Mode::Landscape;
    }

    /// Redraws the current mode.
    ///
    /// Returns the canvas stats; the painter is not measured.
    pub fn render(&mut self, raster: &mut dyn Rasterizer) -> Option<RenderStats> {
        match self.mode {
            Mode::Canvas => {
                let stats = self.scene.render_all(raster);
                self.last_stats = Some(stats);
                Some(stats)
            }
            Mode::Landscape => {
                self.painter.paint(raster);
                None
            }
        }
    }

    /// Starts a load: empties the scene now and freezes it until the ticket comes back.
    pub fn begin_load(&mut self) -> Result<LoadTicket, LoadInFlight> {
        if self.pending.is_some() {
            warn!("load requested while another load is in progress");
            return Err(LoadInFlight);
        }

        let id = NEXT_TICKET.fetch_add(1, Ordering::Relaxed);
        self.pending = Some(id);

        self.scene.clear();
        self.mode = Mode::Canvas;
        Ok(LoadTicket { id })
    }

    /// Completes a load with the file's text.
    ///
    /// On success the scene holds the loaded shapes and their count is
    /// returned. On failure the error is logged and the scene stays empty.
    pub fn finish_load(&mut self, ticket: LoadTicket, text: &str) -> Result<usize, LoadError> {
        self.release(ticket)?;

        match persist::parse_save(text, self.policy) {
            Ok(scene) => {
                info!("loaded {} shapes", scene.len());
                self.scene = scene;
                self.mode = Mode::Canvas;
                Ok(self.scene.len())
            }
            Err(e) => {
                error!("load failed: {e}");
                Err(e)
            }
        }
    }

    /// Abandons a load whose contents could not be read.
    pub fn cancel_load(&mut self, ticket: LoadTicket, reason: &LoadError) {
        if self.release(ticket).is_ok() {
            error!("load failed: {reason}");
        }
    }

    fn release(&mut self, ticket: LoadTicket) -> Result<(), LoadError> {
        if self.pending != Some(ticket.id) {
            warn!("ignoring load ticket {} that this session did not issue", ticket.id);
            return Err(LoadError::ForeignTicket(ticket.id));
        }
        self.pending = None;
        Ok(())
    }

    /// The scene as save-file JSON.
    pub fn save_json(&self) -> String {
        persist::to_json(&self.scene)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        persist::write_save(path, &self.scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Color;
    use crate::raster::{RasterCall, RecordingRasterizer};
    use crate::scene::ShapeKind;

    const TWO_SHAPES: &str = r#"{"shapesList":[
        {"type":"point","position":[0,0],"color":[1,0,0,1],"size":5},
        {"type":"circle","position":[0.5,0.5],"color":[0,1,0,1],"size":0.1,"segments":6}
    ]}"#;

    #[test]
    fn stroke_appends_brush_shape() {
        let mut s = Session::default();
        s.brush.kind = ShapeKind::Triangle;
        assert!(s.stroke(Vec2::new(0.1, 0.1)));
        assert!(s.stroke(Vec2::new(0.2, 0.2)));

        assert_eq!(s.scene().len(), 2);
        assert_eq!(s.scene().shapes()[1].kind(), ShapeKind::Triangle);
        assert_eq!(s.scene().shapes()[1].position(), Vec2::new(0.2, 0.2));
    }

    #[test]
    fn render_canvas_records_stats() {
        let mut s = Session::default();
        s.stroke(Vec2::zero());
        let mut r = RecordingRasterizer::new();

        let stats = s.render(&mut r).unwrap();
        assert_eq!(stats.shape_count, 1);
        assert_eq!(s.last_stats(), Some(stats));
        assert_eq!(r.clear_count(), 1);
        assert_eq!(r.point_count(), 1);
    }

    #[test]
    fn landscape_mode_runs_painter_and_stroke_leaves_it() {
        let mut s = Session::default();
        s.stroke(Vec2::zero());
        s.paint_landscape();
        assert_eq!(s.mode(), Mode::Landscape);
        assert!(s.scene().is_empty());

        let mut r = RecordingRasterizer::new();
        assert!(s.render(&mut r).is_none());
        assert_eq!(r.calls()[0], RasterCall::SetClearColor(Color::WHITE));
        assert!(r.triangle_count() > 0);

        s.stroke(Vec2::zero());
        assert_eq!(s.mode(), Mode::Canvas);
    }

    #[test]
    fn clear_empties_and_returns_to_canvas() {
        let mut s = Session::default();
        s.stroke(Vec2::zero());
        s.paint_landscape();
        s.clear();
        s.clear();
        assert!(s.scene().is_empty());
        assert_eq!(s.mode(), Mode::Canvas);
    }

    #[test]
    fn load_replaces_scene() {
        let mut s = Session::default();
        s.stroke(Vec2::zero());

        let ticket = s.begin_load().unwrap();
        assert!(s.scene().is_empty());
        assert!(s.is_loading());

        assert_eq!(s.finish_load(ticket, TWO_SHAPES).unwrap(), 2);
        assert!(!s.is_loading());
        assert_eq!(s.scene().shapes()[1].segments(), Some(6));
    }

    #[test]
    fn second_load_is_rejected_while_pending() {
        let mut s = Session::default();
        let ticket = s.begin_load().unwrap();
        assert!(s.begin_load().is_err());

        s.finish_load(ticket, TWO_SHAPES).unwrap();
        assert!(s.begin_load().is_ok());
    }

    #[test]
    fn strokes_are_dropped_during_load() {
        let mut s = Session::default();
        let ticket = s.begin_load().unwrap();
        assert!(!s.stroke(Vec2::zero()));
        assert!(s.scene().is_empty());

        s.finish_load(ticket, TWO_SHAPES).unwrap();
        assert_eq!(s.scene().len(), 2);
        assert!(s.stroke(Vec2::zero()));
    }

    #[test]
    fn failed_load_leaves_scene_empty_and_releases_guard() {
        let mut s = Session::default();
        s.stroke(Vec2::zero());

        let ticket = s.begin_load().unwrap();
        let err = s.finish_load(ticket, r#"{"shapesList":[]}"#).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
        assert!(s.scene().is_empty());
        assert!(!s.is_loading());

        let ticket = s.begin_load().unwrap();
        assert!(matches!(s.finish_load(ticket, "not json"), Err(LoadError::Parse(_))));
        assert!(s.scene().is_empty());
    }

    #[test]
    fn cancel_releases_guard() {
        let mut s = Session::default();
        let ticket = s.begin_load().unwrap();
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        s.cancel_load(ticket, &LoadError::Io(io));
        assert!(!s.is_loading());
        assert!(s.scene().is_empty());
    }

    #[test]
    fn foreign_ticket_is_refused() {
        let mut a = Session::default();
        let mut b = Session::default();
        let ta = a.begin_load().unwrap();
        let tb = b.begin_load().unwrap();

        let err = a.finish_load(tb, TWO_SHAPES).unwrap_err();
        assert!(matches!(err, LoadError::ForeignTicket(_)), "{err}");
        assert!(err.to_string().contains("ticket"));
        assert!(a.is_loading());
        assert!(a.scene().is_empty());

        assert_eq!(a.finish_load(ta, TWO_SHAPES).unwrap(), 2);
    }

    #[test]
    fn fresh_sessions_issue_distinct_tickets() {
        let mut a = Session::default();
        let mut b = Session::default();
        let ta = a.begin_load().unwrap();
        let tb = b.begin_load().unwrap();
        assert_ne!(ta.id, tb.id);

        a.cancel_load(tb, &LoadError::malformed("unused"));
        assert!(a.is_loading());
        a.cancel_load(ta, &LoadError::malformed("unused"));
        assert!(!a.is_loading());
    }

    #[test]
    fn strict_policy_fails_on_unknown_tag() {
        let text = r#"{"shapesList":[
            {"type":"point","position":[0,0],"color":[1,0,0,1],"size":5},
            {"type":"bogus"}
        ]}"#;

        let mut lenient = Session::default();
        let t = lenient.begin_load().unwrap();
        assert_eq!(lenient.finish_load(t, text).unwrap(), 1);

        let mut strict = Session::new(LoadPolicy::Strict);
        let t = strict.begin_load().unwrap();
        assert!(matches!(
            strict.finish_load(t, text),
            Err(LoadError::UnknownShapeTag { index: 1, .. })
        ));
    }

    #[test]
    fn save_json_round_trips_through_load() {
        let mut s = Session::default();
        s.brush.kind = ShapeKind::Circle;
        s.stroke(Vec2::new(-0.5, 0.5));
        let json = s.save_json();
        assert!(json.contains("\"shapesList\""));

        let mut other = Session::default();
        let t = other.begin_load().unwrap();
        other.finish_load(t, &json).unwrap();
        assert_eq!(other.scene(), s.scene());
    }

    #[test]
    fn swapped_painter_is_used() {
        struct Blank;
        impl Painter for Blank {
            fn paint(&self, raster: &mut dyn Rasterizer) {
                raster.clear();
            }
        }

        let mut s = Session::with_painter(LoadPolicy::Lenient, Box::new(Blank));
        s.paint_landscape();
        let mut r = RecordingRasterizer::new();
        s.render(&mut r);
        assert_eq!(r.calls(), &[RasterCall::Clear]);
    }
}
