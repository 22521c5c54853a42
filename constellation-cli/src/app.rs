//! Native window front end.
//!
//! The window acts as drawing surface, frame scheduler and event source for
//! the simulation. With `--watch` the configuration file is watched and the
//! field is rebuilt whenever it changes.

use crate::load_config;
use crate::paint::replay;
use constellation_core::{
    DisplayList, EngineConfig, EventKind, EventSource, FrameHandle, FrameScheduler, InputEvent,
    Key, Simulation, SubscriptionId, WheelDirection,
};
use glam::{Vec2, Vec3};
use log::{error, info};
use notify::{Event, RecommendedWatcher, Watcher};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

const DEFAULT_VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

pub fn run_window(config_path: Option<PathBuf>, watch: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path.as_deref())?;
    let sim = Simulation::new(config, DisplayList::new(), DEFAULT_VIEWPORT)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Constellation")
            .with_inner_size([DEFAULT_VIEWPORT.x, DEFAULT_VIEWPORT.y]),
        ..Default::default()
    };
    eframe::run_native(
        "constellation",
        options,
        Box::new(move |cc| {
            let now_ms = cc.egui_ctx.input(|i| i.time) * 1000.0;
            Ok(Box::new(FieldApp::new(sim, config_path, watch, now_ms)))
        }),
    )?;
    Ok(())
}

/// Scheduler and event source backed by the egui repaint loop
#[derive(Debug, Default)]
struct WindowHost {
    next_id: u64,
    pending_frame: Option<FrameHandle>,
    subscriptions: HashMap<SubscriptionId, EventKind>,
}

impl WindowHost {
    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn wants(&self, kind: EventKind) -> bool {
        self.subscriptions.values().any(|k| *k == kind)
    }
}

impl FrameScheduler for WindowHost {
    fn schedule_next_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next());
        self.pending_frame = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending_frame == Some(handle) {
            self.pending_frame = None;
        }
    }
}

impl EventSource for WindowHost {
    fn subscribe(&mut self, kind: EventKind) -> SubscriptionId {
        let id = SubscriptionId(self.next());
        self.subscriptions.insert(id, kind);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.remove(&id);
    }
}

pub struct FieldApp {
    sim: Simulation<DisplayList>,
    host: WindowHost,
    viewport: Vec2,
    config_path: Option<PathBuf>,
    last_load_error: Option<String>,
    #[allow(dead_code)] // Kept alive to maintain file watching
    file_watcher: Option<RecommendedWatcher>,
    file_receiver: Option<mpsc::Receiver<notify::Result<Event>>>,
}

impl FieldApp {
    fn new(
        mut sim: Simulation<DisplayList>,
        config_path: Option<PathBuf>,
        watch: bool,
        now_ms: f64,
    ) -> Self {
        let mut host = WindowHost::default();
        sim.start(&mut host, now_ms);

        let (file_watcher, file_receiver) = match (&config_path, watch) {
            (Some(path), true) => watch_file(path),
            _ => (None, None),
        };

        Self {
            sim,
            host,
            viewport: DEFAULT_VIEWPORT,
            config_path,
            last_load_error: None,
            file_watcher,
            file_receiver,
        }
    }

    fn reload(&mut self, now_ms: f64) {
        let Some(path) = self.config_path.clone() else {
            return;
        };
        match EngineConfig::from_json_file(&path)
            .map_err(|e| e.to_string())
            .and_then(|config| {
                Simulation::new(config, DisplayList::new(), self.viewport).map_err(|e| e.to_string())
            }) {
            Ok(mut sim) => {
                self.sim.stop(&mut self.host);
                sim.start(&mut self.host, now_ms);
                self.sim = sim;
                self.last_load_error = None;
                info!("reloaded configuration from {}", path.display());
            }
            Err(e) => {
                error!("keeping previous configuration: {}", e);
                self.last_load_error = Some(e);
            }
        }
    }

    fn check_file_changes(&mut self, now_ms: f64) {
        let Some(receiver) = &self.file_receiver else {
            return;
        };
        let mut needs_reload = false;
        while let Ok(event) = receiver.try_recv() {
            match event {
                Ok(Event {
                    kind: notify::EventKind::Modify(_),
                    ..
                }) => needs_reload = true,
                Ok(_) => {}
                Err(e) => error!("file watcher error: {}", e),
            }
        }
        if needs_reload {
            self.reload(now_ms);
        }
    }

    /// Translate this frame's egui input into simulation events.
    fn collect_events(&self, ctx: &egui::Context, origin: egui::Pos2) -> Vec<InputEvent> {
        ctx.input(|i| {
            let mut events = Vec::new();
            if let Some(pos) = i.pointer.hover_pos() {
                let local = pos - origin;
                events.push(InputEvent::PointerMoved(Vec2::new(local.x, local.y)));
            }
            if i.pointer.button_clicked(egui::PointerButton::Primary) {
                events.push(InputEvent::PrimaryClick);
            }
            if i.pointer.button_clicked(egui::PointerButton::Secondary) {
                events.push(InputEvent::SecondaryClick);
            }
            for event in &i.events {
                if let egui::Event::Touch { phase, .. } = event {
                    match phase {
                        egui::TouchPhase::Start => events.push(InputEvent::TouchStart),
                        egui::TouchPhase::End | egui::TouchPhase::Cancel => {
                            events.push(InputEvent::TouchEnd)
                        }
                        egui::TouchPhase::Move => {}
                    }
                }
            }
            let scroll = i.raw_scroll_delta;
            if scroll != egui::Vec2::ZERO {
                // egui reports scrolling up as positive y, the opposite of the DOM
                let delta = Vec3::new(-scroll.x, -scroll.y, 0.0);
                events.push(InputEvent::Wheel(WheelDirection::from_deltas(delta)));
            }
            if i.key_released(egui::Key::Space) {
                events.push(InputEvent::KeyReleased(Key::Space));
            }
            events
        })
    }
}

impl eframe::App for FieldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_file_changes(ctx.input(|i| i.time) * 1000.0);

        if let Some(ref error) = self.last_load_error {
            egui::TopBottomPanel::bottom("errors").show(ctx, |ui| {
                ui.label(egui::RichText::new(format!("Error: {}", error)).color(egui::Color32::RED));
            });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                self.viewport = Vec2::new(rect.width(), rect.height());

                for event in self.collect_events(ctx, rect.min) {
                    if self.host.wants(event.kind()) {
                        // egui has no native context menu to suppress
                        let _ = self.sim.handle_event(event);
                    }
                }

                if self.host.pending_frame.take().is_some() {
                    let now_ms = ctx.input(|i| i.time) * 1000.0;
                    self.sim.on_frame(now_ms, self.viewport, &mut self.host);
                }

                replay(ui.painter(), rect, self.sim.renderer().commands());
            });

        if self.host.pending_frame.is_some() {
            ctx.request_repaint();
        }
    }
}

impl Drop for FieldApp {
    fn drop(&mut self) {
        self.sim.stop(&mut self.host);
    }
}

fn watch_file(
    path: &Path,
) -> (
    Option<RecommendedWatcher>,
    Option<mpsc::Receiver<notify::Result<Event>>>,
) {
    let (tx, rx) = mpsc::channel();
    let mut watcher = match notify::recommended_watcher(move |res| {
        // The receiver is gone during shutdown
        let _ = tx.send(res);
    }) {
        Ok(w) => w,
        Err(e) => {
            error!("cannot watch configuration: {}", e);
            return (None, None);
        }
    };
    if let Err(e) = watcher.watch(path, notify::RecursiveMode::NonRecursive) {
        error!("cannot watch {}: {}", path.display(), e);
        return (None, None);
    }
    info!("watching {}", path.display());
    (Some(watcher), Some(rx))
}
