//! Application main loop
//!
//! Owns the window, the egui/wgpu pipeline and the site shell: router,
//! current page, lightbox and status bar.

use anyhow::Result;
use app_core::{
    AppState, Command, CommandId, Lightbox, PortfolioRepository, Route, Router, SiteSettings,
};
use app_ui::components::chrome::{admin_sidebar, footer, nav_bar};
use app_ui::components::{LightboxView, StatusBar, StatusInfo};
use app_ui::{InputHandler, Page, PageAction, PageContext, Renderer, TextureCache, Theme};
use egui_wgpu::ScreenDescriptor;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Widest content column on public pages
const CONTENT_WIDTH: f32 = 1120.0;
const ADMIN_SIDEBAR_WIDTH: f32 = 220.0;

/// Main application state for the event loop
struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    egui_ctx: egui::Context,
    egui_state: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,

    // Site shell
    state: AppState,
    router: Router,
    page: Page,
    /// Footer details, refreshed on every navigation
    settings: SiteSettings,
    title: String,

    // UI Components
    lightbox: Lightbox,
    lightbox_view: LightboxView,
    textures: TextureCache,
    input_handler: InputHandler,
    theme: Theme,
    status: StatusInfo,
}

impl App {
    fn new(state: AppState, start: Route) -> Result<Self> {
        let config = state.config.read().clone();

        let lightbox = if config.viewer.preload {
            Lightbox::new(state.loader.clone())
        } else {
            Lightbox::without_preload()
        };
        let theme = Theme::by_name(&config.general.theme)
            .with_viewer_background(&config.viewer.background_color);

        let mut router = Router::default();
        router.replace(start, &state.session.read());
        let page = Page::open(router.current(), &state)?;
        let router_path = router.current().path();

        let mut app = Self {
            window: None,
            renderer: None,
            egui_ctx: egui::Context::default(),
            egui_state: None,
            egui_renderer: None,

            settings: state.repo.settings()?,
            page,
            router,
            title: String::new(),

            lightbox,
            lightbox_view: LightboxView::new(theme.viewer_background),
            textures: TextureCache::new(),
            input_handler: InputHandler::new(config.keybindings),
            theme,
            status: StatusInfo {
                location: router_path,
                ..StatusInfo::default()
            },

            state,
        };
        app.publish_head();
        Ok(app)
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height, maximized) = {
            let config = self.state.config.read();
            (
                config.general.window_width,
                config.general.window_height,
                config.general.start_maximized,
            )
        };
        let window_attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(width, height))
            .with_maximized(maximized);

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        // Initialize renderer
        let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;
        renderer.set_clear_color(self.theme.background);

        // Initialize egui
        let egui_state = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &renderer.device,
            renderer.config.format,
            None,
            1,
            false,
        );

        // Apply theme
        self.theme.apply(&self.egui_ctx);

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.egui_state = Some(egui_state);
        self.egui_renderer = Some(egui_renderer);

        Ok(())
    }

    // ========================================
    // Navigation
    // ========================================

    fn navigate(&mut self, route: Route) {
        let changed = self.router.navigate(route, &self.state.session.read());
        if changed && !self.open_current() {
            // Keep the router in step with the page still shown
            self.router.back(&self.state.session.read());
        }
    }

    fn go_back(&mut self) {
        if self.router.back(&self.state.session.read()) {
            self.open_current();
        }
    }

    /// Load the page for the router's current route. On failure the
    /// previous page stays and false is returned.
    fn open_current(&mut self) -> bool {
        self.lightbox.close();
        let route = self.router.current().clone();
        tracing::debug!(%route, "Opening page");

        match Page::open(&route, &self.state) {
            Ok(page) => {
                self.page = page;
                match self.state.repo.settings() {
                    Ok(settings) => self.settings = settings,
                    Err(e) => tracing::warn!("Failed to reload site settings: {}", e),
                }
                self.status.location = route.path();
                self.publish_head();
                true
            }
            Err(e) => {
                tracing::error!("Failed to open {}: {}", route, e);
                self.status.error(e.user_message());
                false
            }
        }
    }

    /// Push the page's head metadata and mirror the title on the window
    fn publish_head(&mut self) {
        let route = self.router.current().clone();
        let origin = self.state.config.read().site.origin.clone();
        let meta = self.page.meta(&origin);
        match self.state.publish_head(&meta, &route) {
            Ok(title) => {
                if let Some(schema) = self.state.head.read().schema_json() {
                    tracing::trace!(target: "head", "{}", schema);
                }
                if let Some(window) = &self.window {
                    window.set_title(&title);
                }
                self.title = title;
            }
            Err(e) => tracing::warn!("Failed to update head for {}: {}", route, e),
        }
    }

    fn handle_action(&mut self, action: PageAction) {
        match action {
            PageAction::Navigate(route) => self.navigate(route),
            PageAction::Logout => {
                if let Err(e) = self.state.logout() {
                    tracing::error!("Logout failed: {}", e);
                    self.status.error(e.user_message());
                    return;
                }
                self.navigate(Route::Login);
            }
            PageAction::Notify(message) => self.status.notify(message),
            PageAction::Failed(e) => {
                if e.is_recoverable() {
                    tracing::warn!("{}", e);
                } else {
                    tracing::error!("{}", e);
                }
                self.status.error(e.user_message());
            }
        }
    }

    // ========================================
    // Command Execution
    // ========================================

    /// Run a bound command. Returns false if it did not apply.
    fn execute_command(&mut self, cmd: &Command) -> bool {
        tracing::debug!("Executing command: {}", cmd.id.as_str());

        if cmd.is_lightbox() && !self.lightbox.is_open() {
            // Mouse back falls through to page history
            if cmd.is(CommandId::LIGHTBOX_PREV) && self.router.can_go_back() {
                self.go_back();
                return true;
            }
            return false;
        }

        match cmd.id.as_str() {
            CommandId::NAV_BACK => self.go_back(),
            CommandId::APP_RELOAD => {
                self.textures.retry_failed();
                if self.open_current() {
                    self.status.notify("Reloaded");
                }
            }
            CommandId::LIGHTBOX_NEXT => self.lightbox.next(),
            CommandId::LIGHTBOX_PREV => self.lightbox.prev(),
            CommandId::LIGHTBOX_CLOSE => self.lightbox.close(),
            CommandId::LIGHTBOX_ZOOM_IN => self.lightbox.zoom_in(),
            CommandId::LIGHTBOX_ZOOM_OUT => self.lightbox.zoom_out(),
            CommandId::LIGHTBOX_RESET => self.lightbox.reset_view(),
            _ => {
                tracing::debug!("Unhandled command: {}", cmd.id.as_str());
                return false;
            }
        }
        true
    }

    /// Store the window size for the next start
    fn remember_window_size(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        if window.is_maximized() {
            return;
        }
        let size: winit::dpi::LogicalSize<u32> =
            window.inner_size().to_logical(window.scale_factor());
        {
            let mut config = self.state.config.write();
            config.general.window_width = size.width;
            config.general.window_height = size.height;
        }
        if let Err(e) = self.state.save_config() {
            tracing::warn!("Failed to save window size: {}", e);
        }
    }

    /// Turn finished decodes into textures
    fn pump_images(&mut self) {
        for outcome in self.state.loader.poll() {
            self.textures.ingest(&self.egui_ctx, outcome);
        }
    }

    // ========================================
    // Frame
    // ========================================

    fn ui(&mut self, ctx: &egui::Context) -> Vec<PageAction> {
        let mut actions = Vec::new();
        let route = self.router.current().clone();

        // Bottom panel - Status bar
        self.status.position = self.lightbox.counter_label().unwrap_or_default();
        self.status.zoom = self
            .lightbox
            .zoom_percent()
            .map(|p| format!("{}%", p))
            .unwrap_or_default();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            StatusBar::ui(ui, &self.status);
        });

        let is_admin = self.page.is_admin();
        let is_public = !is_admin && !self.page.is_bare();

        if is_admin {
            egui::SidePanel::left("admin_sidebar")
                .exact_width(ADMIN_SIDEBAR_WIDTH)
                .resizable(false)
                .show(ctx, |ui| {
                    actions.extend(admin_sidebar(ui, &route, &self.theme));
                });
        } else if is_public {
            egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
                actions.extend(nav_bar(ui, &route, &self.theme));
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt(route.path())
                .auto_shrink(false)
                .show(ui, |ui| {
                    let side = ((ui.available_width() - CONTENT_WIDTH) / 2.0).max(24.0);
                    egui::Frame::none()
                        .inner_margin(egui::Margin::symmetric(side, 0.0))
                        .show(ui, |ui| {
                            let mut cx = PageContext {
                                state: &self.state,
                                theme: &self.theme,
                                textures: &self.textures,
                                lightbox: &mut self.lightbox,
                            };
                            actions.extend(self.page.ui(ui, &mut cx));
                            if is_public {
                                actions.extend(footer(ui, &self.settings, &self.theme));
                            }
                        });
                });
        });

        // Lightbox overlay on top of everything
        self.lightbox_view
            .ui(ctx, &mut self.lightbox, &self.textures, &self.state.loader);

        actions
    }

    fn render(&mut self) {
        // Extract references we need, avoiding borrow conflicts
        let window = match &self.window {
            Some(w) => w.clone(),
            None => return,
        };

        // Get surface texture
        let output = match &mut self.renderer {
            Some(renderer) => match renderer.get_current_texture() {
                Ok(output) => output,
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.handle_device_lost();
                    return;
                }
                Err(e) => {
                    tracing::error!("Surface error: {:?}", e);
                    return;
                }
            },
            None => return,
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Run egui - take input before borrowing self
        let raw_input = match &mut self.egui_state {
            Some(state) => state.take_egui_input(&window),
            None => return,
        };

        self.pump_images();

        let ctx = self.egui_ctx.clone();
        let mut actions = Vec::new();
        let full_output = ctx.run(raw_input, |ctx| {
            actions = self.ui(ctx);
        });

        // Handle UI actions after egui run
        for action in actions {
            self.handle_action(action);
        }

        // Handle platform output
        if let Some(egui_state) = &mut self.egui_state {
            egui_state.handle_platform_output(&window, full_output.platform_output);
        }

        let clipped_primitives = ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        let (Some(renderer), Some(egui_renderer)) = (&self.renderer, &mut self.egui_renderer)
        else {
            return;
        };

        // Render
        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [renderer.size.0, renderer.size.1],
            pixels_per_point: window.scale_factor() as f32,
        };

        let mut encoder = renderer
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui encoder"),
            });

        // Update egui textures
        for (id, delta) in &full_output.textures_delta.set {
            egui_renderer.update_texture(&renderer.device, &renderer.queue, *id, delta);
        }

        egui_renderer.update_buffers(
            &renderer.device,
            &renderer.queue,
            &mut encoder,
            &clipped_primitives,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(renderer.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // SAFETY: The render_pass is dropped before encoder.finish() is called,
            // so the borrow is valid even though we're transmuting the lifetime.
            // egui-wgpu 0.29 requires a 'static render pass.
            let render_pass_static: &mut wgpu::RenderPass<'static> =
                unsafe { std::mem::transmute(&mut render_pass) };

            egui_renderer.render(render_pass_static, &clipped_primitives, &screen_descriptor);
        }

        // Free textures
        for id in &full_output.textures_delta.free {
            egui_renderer.free_texture(id);
        }

        renderer.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to initialize window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(egui_state), Some(window)) = (&mut self.egui_state, &self.window) {
            let response = egui_state.on_window_event(window, &event);
            if response.consumed {
                window.request_redraw();
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested");
                self.remember_window_size();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize((size.width, size.height));
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let Some(cmd) = self.input_handler.handle_key(&event) {
                        if cmd.is(CommandId::APP_EXIT) {
                            event_loop.exit();
                            return;
                        }
                        self.execute_command(&cmd);
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(cmd) = self.input_handler.handle_mouse_button(button, state) {
                    self.execute_command(&cmd);
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.input_handler.update_modifiers(modifiers.state());
            }

            WindowEvent::RedrawRequested => {
                self.render();
            }

            _ => {}
        }

        // Request redraw
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Run the application
pub fn run(state: AppState, start: Route) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(state, start)?;
    event_loop.run_app(&mut app)?;

    tracing::info!("LuminaLens exited");
    Ok(())
}
