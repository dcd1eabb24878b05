use std::time::{Instant, SystemTime, UNIX_EPOCH};
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::WindowBuilder,
};

use canvas_core::{
    export_file_name, Command, CommandOutcome, ExportImage, Session, SessionStatus, Settings,
    Surface, Vec2, BACKGROUND,
};

mod gpu;
mod keys;

use gpu::GpuState;
use keys::{key_action, KeyAction};

const TITLE: &str = "scroll-canvas";

/// Session plus the CPU-side display surface and input bookkeeping.
struct App {
    session: Session,
    surface: Surface,
    cursor: Vec2,
    epoch: Instant,
    last_status: Option<SessionStatus>,
}

impl App {
    fn new(width: u32, height: u32) -> Self {
        Self {
            session: Session::new(Settings::default(), width, height),
            surface: Surface::new(width, height, BACKGROUND),
            cursor: Vec2::ZERO,
            epoch: Instant::now(),
            last_status: None,
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.session.resize_viewport(width, height);
        self.surface.reset(width, height, BACKGROUND);
    }

    fn key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Modifier(held) => self.session.set_modifier(held),
            KeyAction::Command(command) => self.command(command),
        }
    }

    fn command(&mut self, command: Command) {
        match self.session.apply(command) {
            CommandOutcome::Ignored => log::debug!("[cmd] {:?} ignored", command),
            CommandOutcome::Applied => log::info!(
                "[cmd] {:?} -> brush={} speed={} length={}",
                command,
                self.session.settings().brush_size.name(),
                self.session.settings().scroll_speed.name(),
                self.session.settings().canvas_length
            ),
            CommandOutcome::Export(image) => {
                if let Err(e) = write_png(&image) {
                    log::error!("[export] {:?}", e);
                }
            }
        }
    }

    fn window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                self.session.pointer_move(self.cursor, self.epoch.elapsed());
            }
            WindowEvent::CursorLeft { .. } => self.session.pointer_leave(),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.session.pointer_down(self.cursor),
                ElementState::Released => self.session.pointer_up(),
            },
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat,
                        ..
                    },
                ..
            } => {
                if let Some(action) = key_action(*code, state.is_pressed(), *repeat) {
                    self.key(action);
                }
            }
            WindowEvent::Focused(false) => self.session.set_modifier(false),
            _ => {}
        }
    }

    /// Title text when the status changed since the last frame.
    fn title_update(&mut self) -> Option<String> {
        let status = self.session.status();
        if self.last_status == Some(status) {
            return None;
        }
        self.last_status = Some(status);
        let label = if status.recording {
            "Stop Recording (Space)"
        } else {
            "Start Recording (Space)"
        };
        let mut title = format!("{TITLE} | {label}");
        if status.recording {
            title.push_str(&format!(" | {status}"));
        }
        if status.full_paint_mode {
            title.push_str(" | Full Paint Mode Active");
        }
        Some(title)
    }
}

/// What the loop does with a frame it could not acquire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameSkip {
    Reconfigure,
    Retry,
    Exit,
}

fn on_surface_error(e: &wgpu::SurfaceError) -> FrameSkip {
    match e {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => FrameSkip::Reconfigure,
        wgpu::SurfaceError::OutOfMemory => FrameSkip::Exit,
        _ => FrameSkip::Retry,
    }
}

fn write_png(image: &ExportImage) -> anyhow::Result<()> {
    let millis = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;
    let path = std::env::current_dir()?.join(export_file_name(millis));
    std::fs::write(&path, image.encode_png()?)?;
    log::info!("[export] wrote {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(LogicalSize::new(1200.0, 564.0))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    let (width, height) = state.size();
    let mut app = App::new(width, height);
    log::info!("[viewport] {}x{}", width, height);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            state.resize(size);
            let (w, h) = state.size();
            app.resize(w, h);
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent { event, .. } => app.window_event(&event),
        Event::AboutToWait => {
            // acquire first: a frame that cannot be shown must not advance the scroll
            let frame = match state.acquire() {
                Ok(frame) => frame,
                Err(e) => {
                    match on_surface_error(&e) {
                        FrameSkip::Reconfigure => {
                            log::debug!("[frame] surface lost; reconfiguring");
                            state.resize(state.window.inner_size());
                        }
                        FrameSkip::Retry => log::warn!("[frame] skipped: {:?}", e),
                        FrameSkip::Exit => {
                            log::error!("[frame] out of GPU memory");
                            elwt.exit();
                            return;
                        }
                    }
                    // under ControlFlow::Wait nothing else wakes the loop
                    state.window.request_redraw();
                    return;
                }
            };
            app.session.frame(&mut app.surface);
            state.present(frame, &app.surface);
            if let Some(title) = app.title_update() {
                state.window.set_title(&title);
            }
            state.window.request_redraw();
        }
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_surface_errors_retry_instead_of_stalling() {
        assert_eq!(on_surface_error(&wgpu::SurfaceError::Timeout), FrameSkip::Retry);
    }

    #[test]
    fn lost_surfaces_are_reconfigured() {
        assert_eq!(on_surface_error(&wgpu::SurfaceError::Lost), FrameSkip::Reconfigure);
        assert_eq!(
            on_surface_error(&wgpu::SurfaceError::Outdated),
            FrameSkip::Reconfigure
        );
    }

    #[test]
    fn out_of_memory_exits() {
        assert_eq!(on_surface_error(&wgpu::SurfaceError::OutOfMemory), FrameSkip::Exit);
    }
}
