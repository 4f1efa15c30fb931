#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use egui_reorder::{ReorderCallbacks, ReorderList};

const TRACKS: [&str; 6] = [
    "Intro",
    "Overture",
    "Interlude",
    "Main theme",
    "Reprise",
    "Credits",
];

struct App {
    list: ReorderList,
    show_debug_log: bool,
}

impl Default for App {
    fn default() -> Self {
        let callbacks = ReorderCallbacks::default()
            .on_start(|_event, dragged| log::info!("picked up {dragged:?}"))
            .on_drop(|event, dragged| log::info!("dropped {dragged:?} at {:?}", event.pointer));
        let mut list = ReorderList::new_with_callbacks("playlist", TRACKS.len(), callbacks);
        list.options_mut().debug_event_log = true;
        Self {
            list,
            show_debug_log: false,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("egui_reorder_demo_help").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        "Drag a track onto another: the upper half drops before it, the lower half after.",
                    )
                    .selectable(false),
                );
                ui.checkbox(&mut self.show_debug_log, "debug log");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.list.ui(ui, |ui, index| {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_min_width(240.0);
                    ui.add(egui::Label::new(format!("≡  {}", TRACKS[index])).selectable(false));
                });
            });

            ui.separator();
            let order: Vec<&str> = self.list.ordered(&TRACKS).copied().collect();
            ui.label(format!("Play order: {}", order.join(" → ")));

            if self.show_debug_log {
                ui.separator();
                ui.monospace(self.list.debug_log_text());
            }
        });
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 420.0])
            .with_title("egui_reorder demo"),
        ..Default::default()
    };

    eframe::run_native(
        "egui_reorder demo",
        options,
        Box::new(|_cc| Ok(Box::new(App::default()))),
    )
}
