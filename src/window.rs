//! Windowed backdrop runner.
//!
//! Wires winit events into the animator, the pointer tracker, and the
//! renderer: resize rebuilds the field, cursor motion feeds the repulsion
//! point and the trail, and every redraw advances the simulation one step.

use std::sync::Arc;

use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::animator::FieldAnimator;
use crate::error::BackdropError;
use crate::field::{FieldConfig, ParticleField};
use crate::input::PointerTracker;
use crate::render::Renderer;
use crate::shaders::{LinkVertex, ParticleInstance};
use crate::time::SystemClock;
use crate::trail::PointerTrail;

const WINDOW_TITLE: &str = "driftfield";
const DEFAULT_WIDTH: u32 = 1280;
const DEFAULT_HEIGHT: u32 = 720;

/// Diameter of a trail glow point in pixels.
const TRAIL_POINT_SIZE: f32 = 6.0;

/// Trail glow color, a soft white that reads over both palette tints.
const TRAIL_COLOR: Vec3 = Vec3::new(0.9, 0.85, 1.0);

/// Open a window and animate a particle field in it until closed.
///
/// This is the whole demo: `run(FieldConfig::default())` gives the canonical
/// backdrop. Blocks until the window is closed.
pub fn run(config: FieldConfig) -> Result<(), BackdropError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let field = ParticleField::new(config, DEFAULT_WIDTH as f32, DEFAULT_HEIGHT as f32);
    let mut animator = FieldAnimator::new(field, SystemClock::new());
    animator.start();

    let mut app = BackdropApp::new(animator);
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct BackdropApp {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    animator: FieldAnimator<SystemClock>,
    tracker: PointerTracker,
    trail: PointerTrail,
}

impl BackdropApp {
    fn new(animator: FieldAnimator<SystemClock>) -> Self {
        Self {
            window: None,
            renderer: None,
            animator,
            tracker: PointerTracker::new(),
            trail: PointerTrail::new(),
        }
    }

    fn draw_frame(&mut self, event_loop: &ActiveEventLoop) {
        self.animator.set_pointer(self.tracker.position());
        if let Some(position) = self.tracker.position() {
            self.trail.push(position);
        }
        self.animator.advance();

        let field = self.animator.field();
        let links = field.links();

        let mut instances: Vec<ParticleInstance> = field
            .particles()
            .iter()
            .map(ParticleInstance::from_particle)
            .collect();
        instances.extend(
            self.trail
                .points()
                .iter()
                .map(|p| ParticleInstance::from_trail_point(p, TRAIL_POINT_SIZE, TRAIL_COLOR)),
        );

        let link_vertices: Vec<LinkVertex> = links
            .iter()
            .flat_map(|link| LinkVertex::pair(link, field.particles()))
            .collect();

        if let Some(renderer) = &mut self.renderer {
            match renderer.render(&instances, &link_vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => renderer.resize(winit::dpi::PhysicalSize {
                    width: renderer.config.width,
                    height: renderer.config.height,
                }),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("surface out of memory, shutting down");
                    event_loop.exit();
                }
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for BackdropApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("{}", BackdropError::Window(e));
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        let size = window.inner_size();
        self.animator.resize(size.width as f32, size.height as f32);

        match pollster::block_on(Renderer::new(window)) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => {
                log::error!("{}", BackdropError::Render(e));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.tracker.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                self.animator.stop();
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
                self.animator
                    .resize(physical_size.width as f32, physical_size.height as f32);
                self.trail.clear();
            }
            WindowEvent::CursorLeft { .. } => {
                self.trail.clear();
            }
            WindowEvent::RedrawRequested => {
                self.draw_frame(event_loop);
            }
            _ => {}
        }
    }
}
