//! Owner of all lens state for one mounted menu.
//!
//! Platform code forwards events into the controller and calls
//! [`LensController::on_frame`] from its frame callback. Nothing mutates
//! before [`mount`](LensController::mount) or after
//! [`unmount`](LensController::unmount).

use crate::config::LensConfig;
use crate::error::LensError;
use crate::geometry::{Position, ViewportSize};
use crate::hover::HoverState;
use crate::pointer::PointerTracker;
use crate::scheduler::{FrameLoop, FrameScheduler, ManualScheduler};
use crate::smoothing::Smoother;
use crate::transform::{TransformMapper, Transforms};
use crate::viewport::ViewportTracker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Idle,
    Mounted,
    TornDown,
}

/// What the renderer needs after a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    /// Latest transforms; retained from an earlier frame while the viewport
    /// has zero area, `None` if none were ever computed.
    pub transforms: Option<Transforms>,
    pub hover: Option<usize>,
}

pub struct LensController<S> {
    lifecycle: Lifecycle,
    viewport: ViewportTracker,
    pointer: PointerTracker,
    smoother: Smoother,
    hover: HoverState,
    mapper: TransformMapper,
    frames: FrameLoop<S>,
    transforms: Option<Transforms>,
    dirty: bool,
}

impl<S: FrameScheduler> LensController<S> {
    pub fn new(
        config: LensConfig,
        viewport: ViewportSize,
        link_count: usize,
        scheduler: S,
    ) -> Result<Self, LensError> {
        config.validate()?;
        Ok(Self {
            lifecycle: Lifecycle::Idle,
            viewport: ViewportTracker::new(viewport),
            pointer: PointerTracker::new(),
            smoother: Smoother::new(config.smoothing_alpha),
            hover: HoverState::new(link_count),
            mapper: TransformMapper::new(config),
            frames: FrameLoop::new(scheduler),
            transforms: None,
            dirty: true,
        })
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn raw_position(&self) -> Position {
        self.pointer.position()
    }

    pub fn smoothed_position(&self) -> Position {
        self.smoother.value()
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport.size()
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.hover.index()
    }

    pub fn hover_state(&self) -> &HoverState {
        &self.hover
    }

    pub fn transforms(&self) -> Option<Transforms> {
        self.transforms
    }

    pub fn frames_ticked(&self) -> u64 {
        self.frames.ticks()
    }

    pub fn frame_pending(&self) -> bool {
        self.frames.pending().is_some()
    }

    pub fn scheduler(&self) -> &S {
        self.frames.scheduler()
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        self.frames.scheduler_mut()
    }

    /// Start the smoothing loop.
    pub fn mount(&mut self) {
        match self.lifecycle {
            Lifecycle::Idle => {
                self.lifecycle = Lifecycle::Mounted;
                self.frames.start();
                log::info!(
                    "[lens] mounted: viewport={}x{} links={}",
                    self.viewport.size().width,
                    self.viewport.size().height,
                    self.hover.link_count()
                );
            }
            Lifecycle::Mounted => {}
            Lifecycle::TornDown => log::warn!("[lens] mount after teardown ignored"),
        }
    }

    /// Stop the loop and revoke its pending frame. Final.
    pub fn unmount(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        self.frames.stop();
        self.lifecycle = Lifecycle::TornDown;
        log::info!("[lens] torn down after {} frames", self.frames.ticks());
    }

    fn is_live(&self, what: &str) -> bool {
        let live = self.lifecycle == Lifecycle::Mounted;
        if !live {
            log::trace!("[lens] {} ignored while {:?}", what, self.lifecycle);
        }
        live
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if self.is_live("pointer move") {
            self.pointer.record(x, y);
        }
    }

    pub fn on_resize(&mut self, width: f64, height: f64) {
        if self.is_live("resize") && self.viewport.resize(width, height) {
            self.dirty = true;
        }
    }

    pub fn on_link_enter(&mut self, index: usize) {
        if !self.is_live("link enter") {
            return;
        }
        let before = self.hover.index();
        match self.hover.set_hovered(index) {
            Ok(()) => self.dirty |= before != Some(index),
            Err(e) => log::warn!("[lens] {}", e),
        }
    }

    pub fn on_link_leave(&mut self) {
        if !self.is_live("link leave") {
            return;
        }
        if self.hover.index().is_some() {
            self.hover.clear_hovered();
            self.dirty = true;
        }
    }

    /// One smoothing step per delivered frame. Returns output only when
    /// something visible changed since the previous frame.
    pub fn on_frame(&mut self) -> Option<FrameOutput> {
        if self.lifecycle != Lifecycle::Mounted || !self.frames.begin() {
            return None;
        }
        let prev = self.smoother.value();
        let smoothed = self.smoother.step(self.pointer.position());
        if smoothed != prev {
            self.dirty = true;
        }
        if self.dirty {
            if let Some(t) = self.mapper.map(smoothed, self.viewport.size()) {
                self.transforms = Some(t);
            }
        }
        self.frames.rearm();

        if !std::mem::take(&mut self.dirty) {
            return None;
        }
        Some(FrameOutput {
            transforms: self.transforms,
            hover: self.hover.index(),
        })
    }
}

impl LensController<ManualScheduler> {
    /// Deliver the outstanding frame request, if any, and run it.
    pub fn step(&mut self) -> Option<FrameOutput> {
        self.frames.scheduler_mut().fire()?;
        self.on_frame()
    }
}
