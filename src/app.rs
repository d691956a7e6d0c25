use anyhow::Context;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, ModifiersState, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    config::AppConfig,
    error::InitError,
    gfx::{
        camera::{ControlSurface, ViewState},
        rendering::RenderEngine,
        scene::{figure, Scene, SceneRenderer},
    },
    ui::{camera_controls_panel, control_for_key, UiManager},
};

/// Window application drawing the figure with its camera control panel.
///
/// ```no_run
/// use figurine::{app::FigureApp, config::AppConfig};
///
/// FigureApp::new(AppConfig::default()).run()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct FigureApp {
    config: AppConfig,
}

impl FigureApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Opens the window and runs the event loop until it is closed.
    ///
    /// Frames are drawn only on demand: once after start-up and after every
    /// control trigger, resize or expose.
    ///
    /// # Errors
    /// Fails if the event loop cannot be created or if GPU initialization
    /// fails with an [`InitError`].
    pub fn run(self) -> anyhow::Result<()> {
        let event_loop = EventLoop::new().context("failed to create event loop")?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut state = AppState::new(self.config);
        event_loop
            .run_app(&mut state)
            .context("event loop terminated abnormally")?;

        match state.init_error.take() {
            Some(error) => Err(anyhow::Error::new(error).context("renderer initialization failed")),
            None => Ok(()),
        }
    }
}

/// GPU-side state, present once the window exists.
struct Graphics {
    window: Arc<Window>,
    engine: RenderEngine,
    ui_manager: UiManager,
    scene: Scene,
    renderer: SceneRenderer,
}

impl Graphics {
    fn new(window: Arc<Window>, config: &AppConfig) -> Result<Self, InitError> {
        let (width, height) = window.inner_size().into();

        let mut engine = pollster::block_on(RenderEngine::new(window.clone(), width, height))?;
        let scene = figure().upload(&mut engine)?;
        let renderer = SceneRenderer::new(&mut engine, config.clear_color)?;
        let ui_manager = UiManager::new(
            engine.device(),
            engine.queue(),
            engine.surface_format(),
            &window,
        );

        Ok(Self {
            window,
            engine,
            ui_manager,
            scene,
            renderer,
        })
    }
}

struct AppState {
    config: AppConfig,
    view: ViewState,
    controls: ControlSurface,
    modifiers: ModifiersState,
    graphics: Option<Graphics>,
    init_error: Option<InitError>,
}

impl AppState {
    fn new(config: AppConfig) -> Self {
        Self {
            view: config.view,
            config,
            controls: ControlSurface::default(),
            modifiers: ModifiersState::empty(),
            graphics: None,
            init_error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: InitError) {
        log::error!("{error}");
        self.init_error = Some(error);
        event_loop.exit();
    }

    fn trigger(&mut self, id: &str) {
        self.controls.trigger(id, &mut self.view);
    }

    fn redraw(&mut self) {
        let Some(Graphics {
            window,
            engine,
            ui_manager,
            scene,
            renderer,
        }) = self.graphics.as_mut()
        else {
            return;
        };

        let mut triggered = Vec::new();
        ui_manager.update_logic(window, |ui| {
            triggered = camera_controls_panel(ui, &self.controls, &self.view);
        });
        for id in &triggered {
            self.controls.trigger(id, &mut self.view);
        }
        if !triggered.is_empty() {
            // the panel was built with the old values
            window.request_redraw();
        }

        renderer.record_frame(engine, scene, &self.view);
        engine.present_with(|device, queue, encoder, view| {
            ui_manager.render_display_only(device, queue, encoder, view);
        });
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }

        let attributes = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(error) => {
                self.fail(
                    event_loop,
                    InitError::ContextUnavailable(format!("window: {error}")),
                );
                return;
            }
        };

        match Graphics::new(window, &self.config) {
            Ok(graphics) => {
                let (width, height) = graphics.engine.get_surface_size();
                self.view.projection.resize(width, height);
                graphics.window.request_redraw();
                self.graphics = Some(graphics);
                log::info!("Renderer ready at {width}x{height}");
            }
            Err(error) => self.fail(event_loop, error),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(graphics) = self.graphics.as_mut() else {
            return;
        };

        let ui_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
            window_id,
            event: event.clone(),
        };
        if graphics
            .ui_manager
            .handle_input(&graphics.window, &ui_event)
        {
            graphics.window.request_redraw();
        }
        let ui_wants_keyboard = graphics.ui_manager.wants_keyboard();

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                graphics.engine.resize(width, height);
                self.view.projection.resize(width, height);
                graphics.window.request_redraw();
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }
            WindowEvent::CursorMoved { .. } | WindowEvent::MouseInput { .. } => {
                graphics.window.request_redraw();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if key_code == KeyCode::Escape {
                    event_loop.exit();
                    return;
                }
                if ui_wants_keyboard {
                    return;
                }
                if let Some(id) = control_for_key(key_code, self.modifiers) {
                    let window = graphics.window.clone();
                    self.trigger(id);
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => (),
        }
    }
}
