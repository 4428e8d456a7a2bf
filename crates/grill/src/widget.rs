#![forbid(unsafe_code)]

//! The per-container drag widget.
//!
//! [`Grill`] glues a [`DragSession`] to the host's gesture stream. Pointer
//! moves pass through a [`Throttle`] first, so the geometry work runs at most
//! once per configured window. Caller hooks and container notifications fire
//! only for transitions where the session actually did something.
//!
//! # Invariants
//!
//! 1. A trailing move sample never runs after the stop that ended its drag.
//!    Samples already due at the stop are delivered before it.
//! 2. Every `grill:dragstart` is followed by exactly one `grill:dragstop`
//!    before the next `grill:dragstart`.

use std::fmt;

use grill_core::event::{GestureInfo, GrillEvent};
use grill_core::rate_limit::Throttle;
use grill_layout::{DragSession, DragTransition, Presentation, TileId, TileSequence};
use web_time::Instant;

use crate::config::GrillConfig;
use crate::error::Result;

/// Caller callback for one lifecycle phase.
pub type Hook = Box<dyn FnMut(&GestureInfo)>;

/// Optional callbacks run after the session handles each phase.
#[derive(Default)]
pub struct GrillHooks {
    pub start: Option<Hook>,
    pub drag: Option<Hook>,
    pub stop: Option<Hook>,
}

impl GrillHooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_start(mut self, hook: impl FnMut(&GestureInfo) + 'static) -> Self {
        self.start = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_drag(mut self, hook: impl FnMut(&GestureInfo) + 'static) -> Self {
        self.drag = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_stop(mut self, hook: impl FnMut(&GestureInfo) + 'static) -> Self {
        self.stop = Some(Box::new(hook));
        self
    }
}

impl fmt::Debug for GrillHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrillHooks")
            .field("start", &self.start.is_some())
            .field("drag", &self.drag.is_some())
            .field("stop", &self.stop.is_some())
            .finish()
    }
}

fn run_hook(hook: &mut Option<Hook>, info: &GestureInfo) {
    if let Some(hook) = hook {
        hook(info);
    }
}

// ---------------------------------------------------------------------------
// Grill
// ---------------------------------------------------------------------------

/// Drag-to-reorder widget attached to one container.
#[derive(Debug)]
pub struct Grill {
    config: GrillConfig,
    tiles: TileSequence,
    session: DragSession,
    throttle: Throttle<GestureInfo>,
    hooks: GrillHooks,
    started_at: Option<Instant>,
}

impl Grill {
    /// Attach to a container of `container_width` pixels holding `tiles`.
    ///
    /// Fails when the configuration does not validate.
    pub fn new(
        config: GrillConfig,
        tiles: TileSequence,
        container_width: f64,
        hooks: GrillHooks,
    ) -> Result<Self> {
        let config = config.validated()?;
        let session = DragSession::new(config.metrics(container_width), config.styles());
        let throttle = Throttle::new(config.throttle_wait());
        tracing::info!(
            tiles = tiles.len(),
            container_width,
            throttle_ms = config.throttle_ms,
            "grill attached"
        );
        Ok(Self {
            config,
            tiles,
            session,
            throttle,
            hooks,
            started_at: None,
        })
    }

    /// Build the tile ordering from `(id, class list)` pairs and attach.
    pub fn from_class_lists<I, S>(
        config: GrillConfig,
        entries: I,
        container_width: f64,
        hooks: GrillHooks,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (TileId, S)>,
        S: AsRef<str>,
    {
        let tiles = TileSequence::from_class_lists(entries, config.full_span)?;
        Self::new(config, tiles, container_width, hooks)
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GrillConfig {
        &self.config
    }

    /// Current committed tile ordering.
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &TileSequence {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> &DragSession {
        &self.session
    }

    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_active()
    }

    /// When the host should call [`tick`](Self::tick) next, if ever.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.throttle.next_deadline()
    }

    /// The container was resized.
    pub fn resize(&mut self, container_width: f64) {
        self.session.set_metrics(self.config.metrics(container_width));
    }

    /// Drag start on `tile`.
    pub fn on_start<P: Presentation>(
        &mut self,
        presentation: &mut P,
        tile: TileId,
        info: &GestureInfo,
        now: Instant,
    ) -> DragTransition {
        let helper = self.config.uses_helper();
        let transition = self.session.start(presentation, &self.tiles, tile, helper);
        if !transition.effect.is_noop() {
            self.throttle.cancel();
            self.started_at = Some(now);
            run_hook(&mut self.hooks.start, info);
            presentation.trigger(GrillEvent::DragStart);
        }
        transition
    }

    /// Pointer move. Returns the transition if the sample was processed now.
    pub fn on_move<P: Presentation>(
        &mut self,
        presentation: &mut P,
        info: &GestureInfo,
        now: Instant,
    ) -> Option<DragTransition> {
        let sample = self.throttle.call(now, *info)?;
        Some(self.deliver_move(presentation, &sample))
    }

    /// Deliver a trailing move sample whose window has elapsed.
    pub fn tick<P: Presentation>(
        &mut self,
        presentation: &mut P,
        now: Instant,
    ) -> Option<DragTransition> {
        let sample = self.throttle.poll(now)?;
        Some(self.deliver_move(presentation, &sample))
    }

    /// Drag end.
    ///
    /// A trailing move whose window already elapsed by `now` is delivered
    /// first; one still inside its window is discarded.
    pub fn on_end<P: Presentation>(
        &mut self,
        presentation: &mut P,
        info: &GestureInfo,
        now: Instant,
    ) -> DragTransition {
        let _ = self.tick(presentation, now);
        if self.throttle.has_trailing() {
            tracing::trace!("trailing move sample dropped at drag end");
        }
        self.throttle.cancel();
        let transition = self.session.stop(presentation, &mut self.tiles);
        if !transition.effect.is_noop() {
            if let Some(started) = self.started_at.take() {
                let held_ms = now.saturating_duration_since(started).as_millis() as u64;
                tracing::debug!(held_ms, "drag gesture finished");
            }
            run_hook(&mut self.hooks.stop, info);
            presentation.trigger(GrillEvent::DragStop);
        }
        transition
    }

    fn deliver_move<P: Presentation>(
        &mut self,
        presentation: &mut P,
        info: &GestureInfo,
    ) -> DragTransition {
        let transition = self.session.drag(presentation, &self.tiles, info);
        if !transition.effect.is_noop() {
            run_hook(&mut self.hooks.drag, info);
            presentation.trigger(GrillEvent::Drag);
        }
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use grill_layout::DragEffect;
    use grill_layout::testing::RecordingPresentation;

    fn grill(hooks: GrillHooks) -> (Grill, RecordingPresentation) {
        let grill = Grill::from_class_lists(
            GrillConfig::default(),
            (0..4u64).map(|i| (TileId(i), "dtm-panel grid3")),
            620.0,
            hooks,
        )
        .expect("valid grill");
        let view = RecordingPresentation::new(grill.tiles(), *grill.session().metrics());
        (grill, view)
    }

    #[test]
    fn move_while_idle_fires_nothing() {
        let (mut grill, mut view) = grill(GrillHooks::new());
        let t = grill
            .on_move(&mut view, &GestureInfo::at(0.0, 400.0), Instant::now())
            .expect("first sample passes the throttle");
        assert!(t.effect.is_noop());
        assert!(view.events().is_empty());
    }

    #[test]
    fn hooks_run_once_per_acting_phase() {
        let starts = Rc::new(Cell::new(0));
        let stops = Rc::new(Cell::new(0));
        let hooks = GrillHooks::new()
            .on_start({
                let starts = Rc::clone(&starts);
                move |_| starts.set(starts.get() + 1)
            })
            .on_stop({
                let stops = Rc::clone(&stops);
                move |_| stops.set(stops.get() + 1)
            });
        let (mut grill, mut view) = grill(hooks);
        let t0 = Instant::now();
        let info = GestureInfo::at(0.0, 0.0);

        grill.on_start(&mut view, TileId(0), &info, t0);
        grill.on_start(&mut view, TileId(1), &info, t0);
        grill.on_end(&mut view, &info, t0);
        grill.on_end(&mut view, &info, t0);

        assert_eq!(starts.get(), 1);
        assert_eq!(stops.get(), 1);
        assert_eq!(view.events(), &[GrillEvent::DragStart, GrillEvent::DragStop]);
    }

    #[test]
    fn end_discards_pending_trailing_move() {
        let (mut grill, mut view) = grill(GrillHooks::new());
        let t0 = Instant::now();
        grill.on_start(&mut view, TileId(0), &GestureInfo::at(0.0, 0.0), t0);

        let first = grill.on_move(&mut view, &GestureInfo::at(0.0, 20.0), t0);
        assert!(matches!(
            first.map(|t| t.effect),
            Some(DragEffect::Unchanged { .. })
        ));
        let suppressed = grill.on_move(
            &mut view,
            &GestureInfo::at(0.0, 400.0),
            t0 + Duration::from_millis(10),
        );
        assert!(suppressed.is_none());
        assert!(grill.next_deadline().is_some());

        let stop = grill.on_end(
            &mut view,
            &GestureInfo::at(0.0, 400.0),
            t0 + Duration::from_millis(20),
        );
        assert!(matches!(
            stop.effect,
            DragEffect::Committed {
                from_index: 0,
                to_index: 0,
                ..
            }
        ));
        assert!(grill.next_deadline().is_none());
        let late = grill.tick(&mut view, t0 + Duration::from_millis(200));
        assert!(late.is_none());
        assert_eq!(grill.tiles().ids(), (0..4).map(TileId).collect::<Vec<_>>());
    }

    #[test]
    fn end_delivers_overdue_trailing_move_first() {
        let (mut grill, mut view) = grill(GrillHooks::new());
        let t0 = Instant::now();
        grill.on_start(&mut view, TileId(0), &GestureInfo::at(0.0, 0.0), t0);
        grill.on_move(&mut view, &GestureInfo::at(0.0, 20.0), t0);
        let later = t0 + Duration::from_millis(10);
        let held = grill.on_move(&mut view, &GestureInfo::at(322.0, 320.0), later);
        assert!(held.is_none());

        // The window closed at 60ms but the host never ticked.
        let end = t0 + Duration::from_millis(100);
        let stop = grill.on_end(&mut view, &GestureInfo::default(), end);
        assert!(matches!(
            stop.effect,
            DragEffect::Committed {
                from_index: 0,
                to_index: 3,
                ..
            }
        ));
        assert_eq!(grill.tiles().ids(), [1, 2, 3, 0].map(TileId).to_vec());
        assert_eq!(view.tile_order(), grill.tiles().ids());
        assert_eq!(
            view.events(),
            &[
                GrillEvent::DragStart,
                GrillEvent::Drag,
                GrillEvent::Drag,
                GrillEvent::DragStop,
            ]
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = GrillConfig::default();
        config.throttle_ms = 0;
        let err =
            Grill::new(config, TileSequence::default(), 620.0, GrillHooks::new()).unwrap_err();
        assert!(err.to_string().contains("throttle_ms"));
    }

    #[test]
    fn hooks_debug_reports_presence() {
        let hooks = GrillHooks::new().on_drag(|_| {});
        let rendered = format!("{hooks:?}");
        assert!(rendered.contains("drag: true"));
        assert!(rendered.contains("start: false"));
    }
}
