//! Application State
//!
//! This module defines the main application state and initialization logic.
//! It implements the MVU (Model-View-Update) pattern's Controller component.
//!
//! # Architecture
//!
//! The `App` struct contains:
//! - **Page**: current image, results, mode and pending job
//! - **Camera**: the open camera dialog, if any, and its textures
//! - **Live sampling**: the repaint-driven scheduler and the frame channel
//! - **Notifications**: toast system for user feedback
//!
//! # MVU Loop
//!
//! The `eframe::App::update()` implementation follows this flow:
//! 1. Pump background work (camera acquisition, live frames, recognition)
//! 2. Collect dropped files
//! 3. Render current page view (pure function)
//! 4. Handle UI commands from view (state mutations)
//!
//! This ensures unidirectional data flow and predictable state management.

use crate::components::{Toast, theme};
use crate::config::AppConfig;
use crate::events::UiCommand;
use crate::logic::utils::rgb_to_color_image;
use crate::logic::{CameraDialogState, EguiRefresh, PageController};
use crate::pages::{CameraDialog, CameraDialogView, IndexPage, IndexView};
use egui::{TextureHandle, TextureOptions};
use logging::Logger;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Instant;
use vision::{
    CameraConfig, CapturedFrame, DroppedFile, MediaDevices, MockAnalyzer, OpenCvDevices,
    SyntheticDevices,
};

/// Synthetic camera resolution
const SYNTHETIC_WIDTH: u32 = 640;
const SYNTHETIC_HEIGHT: u32 = 480;

/// Main application state - MVU Controller
pub struct App {
    // Config
    pub(super) config: AppConfig,

    // Logger
    pub(super) logger: Logger,

    // Recognition page
    pub(super) page: PageController,
    pub(super) path_input: String,
    pub(super) preview_texture: Option<(u64, TextureHandle)>,

    // Camera
    pub(super) devices: Arc<dyn MediaDevices>,
    pub(super) camera: Option<CameraDialogState>,
    pub(super) camera_texture: Option<TextureHandle>,
    pub(super) last_camera_frame: Option<Instant>,

    // Live sampling
    pub(super) refresh: EguiRefresh,
    pub(super) live_tx: Sender<CapturedFrame>,
    pub(super) live_rx: Receiver<CapturedFrame>,

    // UI State
    pub(super) current_toast: Option<Toast>,
}

impl App {
    /// Create a new App instance with configuration and logger
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, logger: Logger) -> Self {
        logger.info("[APP] Initializing application...");
        logger.info(&format!(
            "[APP] Configuration loaded - log_level: {:?}, camera_fps: {}, synthetic_camera: {}",
            config.log_level, config.camera_fps, config.synthetic_camera
        ));

        let devices = Self::camera_devices(&config, &logger.for_component("Camera"));
        let analyzer =
            MockAnalyzer::new(config.recognition_delay, logger.for_component("Recognition"));
        let page = PageController::new(analyzer, config.live_interval, logger.clone());
        let (live_tx, live_rx) = channel();

        let app = Self {
            page,
            path_input: String::new(),
            preview_texture: None,
            devices,
            camera: None,
            camera_texture: None,
            last_camera_frame: None,
            refresh: EguiRefresh::new(cc.egui_ctx.clone()),
            live_tx,
            live_rx,
            current_toast: None,
            logger: logger.clone(),
            config,
        };

        logger.info("[APP] Application initialized successfully");
        app
    }

    fn camera_devices(config: &AppConfig, logger: &Logger) -> Arc<dyn MediaDevices> {
        if config.synthetic_camera {
            logger.info("[CAMERA] Using synthetic camera");
            return Arc::new(SyntheticDevices::new(SYNTHETIC_WIDTH, SYNTHETIC_HEIGHT));
        }

        let camera_config = CameraConfig::new(config.camera_fps).unwrap_or_else(|e| {
            logger.warn(&format!("[CAMERA] {}, using default camera settings", e));
            CameraConfig::default()
        });
        Arc::new(OpenCvDevices::new(camera_config, logger.clone()))
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- MVU UPDATE LOOP ---

        // 1. Camera acquisition, live sampling and preview frames
        self.pump_camera(ctx);

        // 2. Finish the recognition job when due
        self.poll_recognition(ctx);

        // 3. Keep the page texture in sync with the preview
        self.sync_preview_texture(ctx);

        // 4. Files dropped on the window
        let (dropped, is_drag_active) = Self::collect_dropped_files(ctx);

        // 5. Render the view and collect UI commands
        let mut ui_command = self.render_view(ctx, is_drag_active);
        if !dropped.is_empty() {
            ui_command = Some(UiCommand::FilesDropped(dropped));
        }

        // 6. Process UI command (if any)
        if let Some(command) = ui_command {
            self.handle_ui_command(command);
        }

        // 7. Render toast notification (if any)
        self.render_toast(ctx);
    }

    /// Called when the app is about to close
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.logger.info("[APP] Application shutting down...");

        if self.camera.is_some() {
            self.logger.info("[APP] Releasing camera");
            self.handle_close_camera();
        }

        self.logger.info("[APP] Cleanup complete, goodbye!");
    }
}

impl App {
    /// Renders the page and, on top of it, the camera dialog
    fn render_view(&mut self, ctx: &egui::Context, is_drag_active: bool) -> Option<UiCommand> {
        let mut ui_command = None;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BACKGROUND)
                    .inner_margin(egui::Margin::symmetric(32, 0)),
            )
            .show(ctx, |ui| {
                ui_command = IndexPage::show(
                    ui,
                    IndexView {
                        page: &self.page,
                        preview_texture: self.preview_texture.as_ref().map(|(_, tex)| tex),
                        path_input: &mut self.path_input,
                        is_drag_active,
                    },
                );
            });

        if let Some(camera) = &self.camera {
            let capture = camera.capture();
            let session = capture.session();
            let is_live = capture.is_live();

            // Live frames go through the page; the raw preview only while idle
            let texture = if is_live {
                self.preview_texture.as_ref().map(|(_, tex)| tex)
            } else {
                self.camera_texture.as_ref()
            };

            let view = CameraDialogView {
                state: session.state(),
                error: session.last_error(),
                texture,
                results: self.page.results(),
                is_live,
                can_capture: capture.can_capture_photo(),
                can_toggle_live: capture.can_arm_live(),
                live_frames: capture.live_frames(),
            };
            ui_command = CameraDialog::show(ctx, view).or(ui_command);
        }

        ui_command
    }

    fn collect_dropped_files(ctx: &egui::Context) -> (Vec<DroppedFile>, bool) {
        let (dropped, hovering) = ctx.input(|i| {
            (
                i.raw.dropped_files.clone(),
                !i.raw.hovered_files.is_empty(),
            )
        });

        let files = dropped
            .into_iter()
            .map(|file| {
                let name = match &file.path {
                    Some(path) if file.name.is_empty() => path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    _ => file.name.clone(),
                };
                let bytes = match (&file.bytes, &file.path) {
                    (Some(bytes), _) => bytes.to_vec(),
                    // An unreadable file becomes an empty payload and is rejected as such
                    (None, Some(path)) => std::fs::read(path).unwrap_or_default(),
                    (None, None) => Vec::new(),
                };
                let mime_type = (!file.mime.is_empty()).then(|| file.mime.clone());
                DroppedFile {
                    name,
                    mime_type,
                    bytes,
                }
            })
            .collect();

        (files, hovering)
    }

    fn sync_preview_texture(&mut self, ctx: &egui::Context) {
        let Some(preview) = self.page.preview() else {
            self.preview_texture = None;
            return;
        };
        if let Some((revision, _)) = &self.preview_texture
            && *revision == preview.revision
        {
            return;
        }

        let image = rgb_to_color_image(
            preview.width as usize,
            preview.height as usize,
            &preview.rgb,
        );
        match &mut self.preview_texture {
            Some((revision, texture)) => {
                texture.set(image, TextureOptions::LINEAR);
                *revision = preview.revision;
            }
            None => {
                let texture = ctx.load_texture("page_preview", image, TextureOptions::LINEAR);
                self.preview_texture = Some((preview.revision, texture));
            }
        }
    }

    pub(super) fn set_camera_texture(&mut self, ctx: &egui::Context, frame: &CapturedFrame) {
        let image = rgb_to_color_image(
            frame.width() as usize,
            frame.height() as usize,
            frame.pixels(),
        );
        match &mut self.camera_texture {
            Some(texture) => texture.set(image, TextureOptions::LINEAR),
            None => {
                self.camera_texture =
                    Some(ctx.load_texture("camera_preview", image, TextureOptions::LINEAR));
            }
        }
    }

    /// Renders a toast notification if one exists
    fn render_toast(&mut self, ctx: &egui::Context) {
        // show() returns true if user clicked dismiss OR toast expired
        if let Some(toast) = &self.current_toast
            && toast.show(ctx)
        {
            self.current_toast = None;
        }
    }

    /// Shows an error toast notification to the user
    pub(super) fn show_error(&mut self, message: impl Into<String>) {
        self.current_toast = Some(Toast::error(message));
    }

    /// Shows a success toast notification to the user
    pub(super) fn show_success(&mut self, message: impl Into<String>) {
        self.current_toast = Some(Toast::success(message));
    }

    /// Shows an info toast notification to the user
    pub(super) fn show_info(&mut self, message: impl Into<String>) {
        self.current_toast = Some(Toast::info(message));
    }
}
