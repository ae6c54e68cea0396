use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::SceneConfig;
use crate::host::SceneHost;
use crate::orbit::OrbitController;
use crate::renderer::SceneRenderer;

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;
const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Window lifecycle and per-frame orchestration. Each redraw consumes the
/// pending frame request, applies the orbit pose, advances animations, and
/// renders; teardown runs through `unmount` exactly once.
pub struct App {
    config: SceneConfig,
    show_overlay: bool,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    host: Option<SceneHost>,
    orbit: Option<OrbitController>,
    cursor: Vec2,
    last_frame_time: Instant,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    pub fn new(config: SceneConfig, show_overlay: bool) -> Self {
        Self {
            config,
            show_overlay,
            window: None,
            renderer: None,
            host: None,
            orbit: None,
            cursor: Vec2::ZERO,
            last_frame_time: Instant::now(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            println!("FPS: {:.1}", self.fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    /// Scene teardown first, GPU resources with the renderer after.
    fn unmount(&mut self) {
        if let Some(host) = &mut self.host {
            host.unmount();
        }
        if let Some(orbit) = &mut self.orbit {
            orbit.dispose();
        }
        self.host = None;
        self.orbit = None;
        self.renderer = None;
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Shader Cube")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let mut host = match SceneHost::mount(&self.config) {
                Ok(host) => host,
                Err(e) => {
                    eprintln!("Failed to mount scene: {:#}", e);
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            host.camera_mut()
                .set_aspect(size.width as f32, size.height as f32);

            let Some(node) = host.node() else {
                eprintln!("Scene mounted without a node");
                event_loop.exit();
                return;
            };
            let renderer = match pollster::block_on(SceneRenderer::new(
                window.clone(),
                host.scene(),
                node,
                self.show_overlay,
            )) {
                Ok(renderer) => renderer,
                Err(e) => {
                    eprintln!("Failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.orbit = Some(OrbitController::from_camera(host.camera()));
            self.window = Some(window);
            self.renderer = Some(renderer);
            self.host = Some(host);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        if let Some(orbit) = &mut self.orbit {
            orbit.process_event(&event);
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                self.unmount();
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
                if let Some(host) = &mut self.host {
                    host.camera_mut()
                        .set_aspect(new_size.width as f32, new_size.height as f32);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let (Some(host), Some(window)) = (&mut self.host, &self.window) {
                    let size = window.inner_size();
                    if let Some(spin) = host.pointer_click(self.cursor, size.width, size.height) {
                        println!("Spin started: {:?} axis to {:.2} rad", spin.axis, spin.angle);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_time).as_secs_f32();
                self.last_frame_time = now;

                self.update_fps(delta);

                let Some(host) = &mut self.host else { return };
                if !host.begin_tick() {
                    return;
                }

                if let Some(orbit) = &self.orbit {
                    orbit.apply(host.camera_mut());
                }
                host.advance(delta);

                let mut fatal = false;
                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    if let Some(node) = host.node() {
                        match renderer.render(
                            host.scene(),
                            node,
                            host.camera(),
                            window,
                            self.fps,
                            host.elapsed(),
                        ) {
                            Ok(()) => {}
                            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                renderer.resize(window.inner_size());
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                eprintln!("Render error: out of GPU memory");
                                fatal = true;
                            }
                            Err(e) => eprintln!("Render error: {}", e),
                        }
                    }
                }
                if fatal {
                    self.unmount();
                    event_loop.exit();
                    return;
                }

                host.schedule_frame();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(host) = &mut self.host {
            host.schedule_frame();
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.unmount();
    }
}
