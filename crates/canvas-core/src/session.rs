//! Recording session: owns the virtual canvas, the scroll state and the
//! in-progress pointer gesture, and sequences them per frame.
//!
//! Everything runs on one logical thread. Pointer handlers and the frame
//! callback both take `&mut Session`, so the two mutation sites can never
//! interleave inside each other.

use crate::brush::{stamp_band, Brush, BrushSize};
use crate::buffer::{Surface, VirtualCanvas, BACKGROUND};
use crate::compositor;
use crate::constants::{CANVAS_LENGTH_STEP, POINTER_THROTTLE};
use crate::export::ExportImage;
use crate::mapper::CoordinateMapper;
use crate::scroll::{ScrollController, ScrollSpeed, ScrollState, ScrollTick};
use crate::settings::{CanvasLength, Settings};
use glam::Vec2;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordingState {
    #[default]
    Idle,
    Recording,
}

/// The gesture currently held down, in screen space. Exactly one brush mode
/// is active; the mode is picked from the modifier at pointer-down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerDrawState {
    #[default]
    Released,
    /// Point brush: `last_point` is where the previous segment ended.
    Drawing {
        last_point: Vec2,
        current_point: Vec2,
    },
    /// Full-paint band anchored at the latest pointer row.
    Band { band_y: f32 },
}

/// Admits an event only when more than `interval` passed since the last one.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Duration>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn admit(&mut self, now: Duration) -> bool {
        match self.last {
            Some(last) if now.saturating_sub(last) <= self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleRecording,
    Clear,
    Export,
    SetBrush(BrushSize),
    SetSpeed(ScrollSpeed),
    AdjustLength(i32),
}

impl Command {
    /// `AdjustLength` with the default keyboard step in the given direction.
    pub fn nudge_length(up: bool) -> Self {
        Command::AdjustLength(if up {
            CANVAS_LENGTH_STEP
        } else {
            -CANVAS_LENGTH_STEP
        })
    }
}

#[derive(Debug)]
pub enum CommandOutcome {
    Ignored,
    Applied,
    Export(ExportImage),
}

/// Snapshot for the recording button / window title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionStatus {
    pub recording: bool,
    pub offset: u32,
    pub length: u32,
    pub loop_index: u32,
    pub full_paint_mode: bool,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px / {}px (Loop {})",
            self.offset,
            self.length,
            self.loop_index + 1
        )
    }
}

pub struct Session {
    settings: Settings,
    state: RecordingState,
    viewport: (u32, u32),
    canvas: Option<VirtualCanvas>,
    scroll: ScrollController,
    pointer: PointerDrawState,
    modifier_held: bool,
    throttle: Throttle,
    cursor: Option<Vec2>,
}

impl Session {
    pub fn new(settings: Settings, viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            settings,
            state: RecordingState::Idle,
            viewport: (viewport_width.max(1), viewport_height.max(1)),
            canvas: None,
            scroll: ScrollController::new(settings.canvas_length.get(), settings.scroll_speed),
            pointer: PointerDrawState::Released,
            modifier_held: false,
            throttle: Throttle::new(POINTER_THROTTLE),
            cursor: None,
        }
    }

    #[inline]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    #[inline]
    pub fn state(&self) -> RecordingState {
        self.state
    }

    #[inline]
    pub fn is_recording(&self) -> bool {
        self.state == RecordingState::Recording
    }

    #[inline]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    #[inline]
    pub fn canvas(&self) -> Option<&VirtualCanvas> {
        self.canvas.as_ref()
    }

    #[inline]
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    #[inline]
    pub fn pointer_state(&self) -> PointerDrawState {
        self.pointer
    }

    #[inline]
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Modifier held while recording.
    #[inline]
    pub fn full_paint_mode(&self) -> bool {
        self.is_recording() && self.modifier_held
    }

    #[inline]
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.settings.canvas_length.get())
    }

    #[inline]
    pub fn brush(&self) -> Brush {
        Brush::new(self.settings.brush_size, self.mapper())
    }

    pub fn status(&self) -> SessionStatus {
        let scroll = self.scroll.state();
        SessionStatus {
            recording: self.is_recording(),
            offset: scroll.offset,
            length: self.settings.canvas_length.get(),
            loop_index: scroll.loop_index,
            full_paint_mode: self.full_paint_mode(),
        }
    }

    // ---------------- Lifecycle ----------------

    /// Idle -> Recording with a fresh blank canvas and scroll at `{0, 0}`.
    pub fn start_recording(&mut self) -> bool {
        if self.is_recording() {
            return false;
        }
        let length = self.settings.canvas_length.get();
        self.canvas = Some(VirtualCanvas::new(self.viewport.0, length));
        self.scroll.reset(length);
        self.pointer = PointerDrawState::Released;
        self.throttle.reset();
        self.state = RecordingState::Recording;
        log::info!(
            "[session] recording started: {}x{} brush={} speed={}",
            self.viewport.0,
            length,
            self.settings.brush_size.name(),
            self.settings.scroll_speed.name()
        );
        true
    }

    /// Recording -> Idle. The canvas is kept for export or clear.
    pub fn stop_recording(&mut self) -> bool {
        if !self.is_recording() {
            return false;
        }
        self.state = RecordingState::Idle;
        self.pointer = PointerDrawState::Released;
        self.modifier_held = false;
        log::info!(
            "[session] recording stopped at offset {} after {} loop(s)",
            self.scroll.offset(),
            self.scroll.loop_index()
        );
        true
    }

    pub fn toggle_recording(&mut self) -> bool {
        if self.is_recording() {
            self.stop_recording()
        } else {
            self.start_recording()
        }
    }

    /// Blank the canvas and reset the loop counter. Idle only.
    pub fn clear(&mut self) -> bool {
        if self.is_recording() {
            return false;
        }
        if let Some(canvas) = &mut self.canvas {
            canvas.clear();
        }
        self.scroll.reset(self.settings.canvas_length.get());
        log::info!("[session] cleared");
        true
    }

    // ---------------- Settings (idle only) ----------------

    pub fn set_brush_size(&mut self, size: BrushSize) -> bool {
        if self.is_recording() {
            return false;
        }
        self.settings.brush_size = size;
        true
    }

    pub fn set_scroll_speed(&mut self, speed: ScrollSpeed) -> bool {
        if self.is_recording() {
            return false;
        }
        self.settings.scroll_speed = speed;
        self.scroll.set_speed(speed);
        true
    }

    /// A different length replaces any existing canvas with a blank one.
    pub fn set_canvas_length(&mut self, length: CanvasLength) -> bool {
        if self.is_recording() {
            return false;
        }
        if length == self.settings.canvas_length {
            return true;
        }
        self.settings.canvas_length = length;
        self.scroll.reset(length.get());
        if self.canvas.is_some() {
            self.canvas = Some(VirtualCanvas::new(self.viewport.0, length.get()));
            log::info!("[session] canvas reallocated for length {}", length);
        }
        true
    }

    /// Display size changed. The canvas keeps its width; the compositor copies
    /// the columns both share and leaves the rest background.
    pub fn resize_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width.max(1), height.max(1));
    }

    // ---------------- Input ----------------

    /// Full-paint modifier. Pressing only counts while recording; releasing
    /// always ends an active band gesture.
    pub fn set_modifier(&mut self, held: bool) {
        if held {
            if self.is_recording() {
                self.modifier_held = true;
            }
            return;
        }
        self.modifier_held = false;
        if matches!(self.pointer, PointerDrawState::Band { .. }) {
            self.pointer = PointerDrawState::Released;
        }
    }

    /// Cursor preview position; tracked regardless of recording state.
    pub fn hover(&mut self, point: Vec2) {
        self.cursor = Some(point);
    }

    pub fn pointer_down(&mut self, point: Vec2) {
        self.hover(point);
        if !self.is_recording() {
            return;
        }
        if self.modifier_held {
            self.pointer = PointerDrawState::Band { band_y: point.y };
            let mapper = self.mapper();
            let y = mapper.to_virtual(point, self.scroll.offset()).y;
            if let Some(canvas) = &mut self.canvas {
                stamp_band(canvas, &mapper, y, y);
            }
            return;
        }
        self.pointer = PointerDrawState::Drawing {
            last_point: point,
            current_point: point,
        };
        self.throttle.reset();
        let target = self.mapper().to_virtual(point, self.scroll.offset());
        let brush = self.brush();
        if let Some(canvas) = &mut self.canvas {
            brush.stamp_point(canvas, target);
        }
    }

    /// `now` is any monotonic clock; only differences matter.
    pub fn pointer_move(&mut self, point: Vec2, now: Duration) {
        self.hover(point);
        if !self.is_recording() {
            return;
        }
        let mapper = self.mapper();
        let offset = self.scroll.offset();
        let brush = self.brush();
        let Some(canvas) = &mut self.canvas else {
            return;
        };
        match &mut self.pointer {
            PointerDrawState::Released => {}
            PointerDrawState::Band { band_y } => {
                let from = mapper.to_virtual(Vec2::new(0.0, *band_y), offset).y;
                let to = mapper.to_virtual(point, offset).y;
                stamp_band(canvas, &mapper, from, to);
                *band_y = point.y;
            }
            PointerDrawState::Drawing {
                last_point,
                current_point,
            } => {
                if self.throttle.admit(now) {
                    let from = mapper.to_virtual(*last_point, offset);
                    let to = mapper.to_virtual(point, offset);
                    brush.stamp_segment(canvas, from, to);
                    *last_point = point;
                }
                *current_point = point;
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.pointer = PointerDrawState::Released;
    }

    /// Pointer left the canvas: ends the gesture and hides the preview.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
        self.cursor = None;
    }

    // ---------------- Frame ----------------

    /// Advance one tick: scroll, then keep painting under a held pointer.
    ///
    /// The returned offset is the one every other write of this frame uses.
    /// Idle sessions do not move and return `None`.
    pub fn tick(&mut self) -> Option<ScrollTick> {
        if !self.is_recording() {
            return None;
        }
        let tick = self.scroll.tick();
        let mapper = self.mapper();
        let brush = self.brush();
        let canvas = self.canvas.as_mut()?;
        match self.pointer {
            PointerDrawState::Released => {}
            PointerDrawState::Drawing { current_point, .. } => {
                brush.stamp_point(canvas, mapper.to_virtual(current_point, tick.offset));
            }
            PointerDrawState::Band { band_y } => {
                let y = mapper.to_virtual(Vec2::new(0.0, band_y), tick.offset).y;
                stamp_band(canvas, &mapper, y, y);
            }
        }
        Some(tick)
    }

    /// Draw the visible window at `offset` plus the cursor preview.
    pub fn compose_at(&self, offset: u32, surface: &mut Surface) {
        match &self.canvas {
            Some(canvas) => compositor::compose(canvas, offset, surface),
            None => surface.fill(BACKGROUND),
        }
        if let Some(cursor) = self.cursor {
            compositor::draw_cursor_preview(surface, cursor, self.brush().footprint());
        }
    }

    /// One full frame: tick, then composite with that tick's offset.
    pub fn frame(&mut self, surface: &mut Surface) -> Option<ScrollTick> {
        let tick = self.tick();
        let offset = tick.map_or(self.scroll.offset(), |t| t.offset);
        self.compose_at(offset, surface);
        tick
    }

    // ---------------- Output ----------------

    /// Copy of the whole canvas; `None` (and a no-op) when nothing was recorded.
    pub fn export(&self) -> Option<ExportImage> {
        match &self.canvas {
            Some(canvas) => {
                log::info!(
                    "[export] {}x{} image assembled",
                    canvas.width(),
                    canvas.length()
                );
                Some(ExportImage::from_canvas(canvas))
            }
            None => {
                log::info!("[export] nothing recorded yet; skipping");
                None
            }
        }
    }

    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        let applied = match command {
            Command::ToggleRecording => self.toggle_recording(),
            Command::Clear => self.clear(),
            Command::Export => {
                return self
                    .export()
                    .map_or(CommandOutcome::Ignored, CommandOutcome::Export)
            }
            Command::SetBrush(size) => self.set_brush_size(size),
            Command::SetSpeed(speed) => self.set_scroll_speed(speed),
            Command::AdjustLength(delta) => {
                let length = self.settings.canvas_length.nudged(delta);
                self.set_canvas_length(length)
            }
        };
        if applied {
            CommandOutcome::Applied
        } else {
            CommandOutcome::Ignored
        }
    }
}
