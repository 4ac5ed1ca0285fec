use eframe::egui::{self, CentralPanel, Context, RichText, ScrollArea, TextEdit};
use eframe::{App, Frame, NativeOptions};
use egui_extras::{Size, StripBuilder};
use egui_sortable::sort::{sort_strings, SortOrder};
use egui_sortable::utils::trim_symbols;
use egui_sortable::{SortableResponse, SortableUi};

struct ExampleApp {
    items: Vec<String>,
    sortable: SortableUi,
    order: SortOrder,
    draft: String,
    events: Vec<String>,
}

impl Default for ExampleApp {
    fn default() -> Self {
        Self {
            items: ["Pear", "apple", "Banana", "orange", "Kiwi"]
                .into_iter()
                .map(String::from)
                .collect(),
            sortable: SortableUi::default(),
            order: SortOrder::Ascending,
            draft: String::new(),
            events: Vec::new(),
        }
    }
}

impl App for ExampleApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        CentralPanel::default().show(ctx, |ui| {
            ui.heading("Sortable fruit");
            ui.add_space(8.0);
            StripBuilder::new(ui)
                .size(Size::relative(0.55))
                .size(Size::remainder())
                .horizontal(|mut strip| {
                    strip.cell(|ui| self.list_panel(ui));
                    strip.cell(|ui| self.event_panel(ui));
                });
        });
    }
}

impl ExampleApp {
    fn list_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let sort_label = match self.order {
                SortOrder::Ascending => "Sort A-z",
                SortOrder::Descending => "Sort z-A",
            };
            if ui.button(sort_label).clicked() {
                self.items = sort_strings(&self.items, self.order);
                self.events.push(format!("sorted {:?}", self.order));
                self.order = self.order.toggle();
            }
            ui.separator();
            ui.add(TextEdit::singleline(&mut self.draft).hint_text("new item"));
            if ui.button("Add").clicked() {
                // keep pasted labels from degenerating into "aaaaaaa"
                let label = trim_symbols(self.draft.trim(), 3);
                if !label.is_empty() && !self.items.iter().any(|item| item == &label) {
                    self.items.push(label);
                }
                self.draft.clear();
            }
        });
        ui.add_space(4.0);

        let response = self
            .sortable
            .ui_vec(ui, &mut self.items, |ui, mut handle, _idx, item| {
                ui.horizontal(|ui| {
                    handle.ui(ui, item, |ui| {
                        ui.label(RichText::new("☰").color(egui::hex_color!("#9aa0a6")));
                    });
                    handle.delete_ui(ui, item, |ui| {
                        ui.label(RichText::new("✖").color(egui::hex_color!("#e07a5f")));
                    });
                    ui.label(item.clone());
                });
            });

        match response {
            SortableResponse::Completed(moved) => self
                .events
                .push(format!("moved {} -> {}", moved.source, moved.target)),
            SortableResponse::Deleted(index) => self.events.push(format!("deleted item {index}")),
            _ => {}
        }
    }

    fn event_panel(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Events").strong());
        ui.separator();
        ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                if self.events.is_empty() {
                    ui.weak("drag a row by its ☰ handle");
                }
                for entry in self.events.iter().rev() {
                    ui.label(entry.clone());
                }
            });
    }
}

fn main() {
    eframe::run_native(
        "egui_sortable example",
        NativeOptions::default(),
        Box::new(|_cc| Box::new(ExampleApp::default())),
    );
}
