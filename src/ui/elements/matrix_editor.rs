// src/ui/elements/matrix_editor.rs
// The life event rules screen: tab strip, matrix grid, edit controls and
// audit footer.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use egui_extras::{Column, TableBuilder};

use crate::rules::definitions::{BenefitType, EffectiveDateMode, MemberChangeType};
use crate::rules::events::{
    DiscardMatrixEdits, RequestFetchLifeEventRules, RequestSaveEmployerMatrix,
    SetBenefitEnabledRequest, SetEffectiveDateModeRequest,
};
use crate::rules::resources::LifeEventRulesState;
use crate::rules::rule_table::{build_rule_table, RuleTable};
use crate::ui::common::{
    effective_date_mode_label, format_log_timestamp, functional_categories,
    functional_category_label,
};
use crate::ui::UiFeedbackState;

use super::state::{EditorWindowState, MatrixViewVariant};

const ENABLED_CHECK_COLOR: egui::Color32 = egui::Color32::from_rgb(27, 99, 118);

/// The rules editor UI system, run in the egui context pass.
#[allow(clippy::too_many_arguments)]
pub fn life_event_rules_editor_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<EditorWindowState>,
    rules_state: Res<LifeEventRulesState>,
    ui_feedback: Res<UiFeedbackState>,
    mut fetch_writer: EventWriter<RequestFetchLifeEventRules>,
    mut save_writer: EventWriter<RequestSaveEmployerMatrix>,
    mut discard_writer: EventWriter<DiscardMatrixEdits>,
    mut set_mode_writer: EventWriter<SetEffectiveDateModeRequest>,
    mut set_benefit_writer: EventWriter<SetBenefitEnabledRequest>,
) {
    let ctx = contexts.ctx_mut();

    egui::CentralPanel::default().show(ctx, |ui| {
        if rules_state.is_loading() {
            ui.vertical_centered(|ui| {
                ui.heading("Loading");
                ui.spinner();
            });
            return;
        }

        // A failed aggregate fetch blocks the whole screen.
        if let Some(message) = rules_state.fetch_error_message() {
            ui.colored_label(
                egui::Color32::RED,
                "Life event rules could not be loaded.",
            );
            ui.label(message);
            if ui.button("Retry").clicked() {
                fetch_writer.send(RequestFetchLifeEventRules);
            }
            return;
        }

        ui.label(
            "Configure which benefit elections employees may change after a \
             life event, and when those changes take effect.",
        );
        ui.label("Rules apply to newly reported life events only.");

        if !ui_feedback.last_message.is_empty() {
            let color = if ui_feedback.is_error {
                egui::Color32::RED
            } else {
                egui::Color32::DARK_GREEN
            };
            ui.colored_label(color, &ui_feedback.last_message);
        }

        ui.separator();

        // --- View/edit mode controls ---
        ui.horizontal(|ui| match state.variant {
            MatrixViewVariant::Readonly => {
                if ui.button("✏ Edit rules").clicked() {
                    // Start from a fresh copy of the confirmed matrix.
                    discard_writer.send(DiscardMatrixEdits);
                    state.variant = MatrixViewVariant::Edit;
                }
            }
            MatrixViewVariant::Edit => {
                let save_enabled = !rules_state.is_saving();
                if ui
                    .add_enabled(save_enabled, egui::Button::new("💾 Save"))
                    .clicked()
                {
                    save_writer.send(RequestSaveEmployerMatrix);
                }
                if ui.button("Cancel").clicked() {
                    discard_writer.send(DiscardMatrixEdits);
                    state.variant = MatrixViewVariant::Readonly;
                }
                if rules_state.is_saving() {
                    ui.spinner();
                }
            }
        });
        ui.separator();

        let member_change_types = rules_state.member_change_types();
        let benefit_types = rules_state.benefit_types();

        // --- Tab strip of functional categories ---
        let categories = functional_categories(member_change_types);
        if categories.is_empty() {
            ui.label("No member change types are configured for this employer.");
            return;
        }
        let selected_category = state
            .selected_category
            .filter(|category| categories.contains(category))
            .unwrap_or(categories[0]);
        ui.horizontal(|ui| {
            for category in &categories {
                if ui
                    .selectable_label(
                        *category == selected_category,
                        functional_category_label(*category),
                    )
                    .clicked()
                {
                    state.selected_category = Some(*category);
                }
            }
        });
        ui.separator();

        // The readonly view renders the confirmed matrix, the edit view the
        // editable copy. The rule table is rebuilt from whichever is
        // current; it is a derived view with no identity of its own.
        let current_matrix = match state.variant {
            MatrixViewVariant::Readonly => rules_state.confirmed_matrix(),
            MatrixViewVariant::Edit => rules_state.editable_matrix.as_slice(),
        };
        let rule_table = build_rule_table(current_matrix, member_change_types);

        let visible_change_types: Vec<&MemberChangeType> = member_change_types
            .iter()
            .filter(|change_type| change_type.functional_category == selected_category)
            .collect();

        let mut scroll_area = egui::ScrollArea::horizontal()
            .id_salt("employer_matrix_scroll")
            .auto_shrink([false, true]);
        if !state.scroll_restored {
            scroll_area =
                scroll_area.scroll_offset(egui::Vec2::new(state.matrix_scroll_left, 0.0));
            state.scroll_restored = true;
        }
        let scroll_output = scroll_area.show(ui, |ui| {
            matrix_table(
                ui,
                state.variant,
                &visible_change_types,
                benefit_types,
                &rule_table,
                &mut set_mode_writer,
                &mut set_benefit_writer,
            );
        });
        state.matrix_scroll_left = scroll_output.state.offset.x;

        // --- Audit footer ---
        if let Some(log_entry) = rules_state.matrix_log.data.as_ref() {
            if let (Some(created_at), Some(edited_by)) = (
                log_entry.created_at.as_deref(),
                log_entry.edited_by.as_deref(),
            ) {
                ui.separator();
                ui.weak(format!(
                    "Last edited {} by {}.",
                    format_log_timestamp(created_at),
                    edited_by
                ));
            }
        }
    });
}

fn matrix_table(
    ui: &mut egui::Ui,
    variant: MatrixViewVariant,
    visible_change_types: &[&MemberChangeType],
    benefit_types: &[BenefitType],
    rule_table: &RuleTable,
    set_mode_writer: &mut EventWriter<SetEffectiveDateModeRequest>,
    set_benefit_writer: &mut EventWriter<SetBenefitEnabledRequest>,
) {
    let text_style = egui::TextStyle::Body;
    let row_height = ui.text_style_height(&text_style) + 8.0;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(180.0).at_least(120.0).clip(true))
        .column(Column::initial(280.0).at_least(180.0).clip(true));
    for _ in benefit_types {
        table = table.column(Column::initial(90.0).at_least(60.0));
    }

    table
        .header(20.0, |mut header_row| {
            header_row.col(|ui| {
                ui.strong("Life event");
            });
            header_row.col(|ui| {
                ui.strong("Effective").on_hover_text(
                    "When a benefit change becomes effective relative to the \
                     life event date.",
                );
            });
            for benefit_type in benefit_types {
                header_row.col(|ui| {
                    ui.strong(&benefit_type.title);
                });
            }
        })
        .body(|mut body| {
            for change_type in visible_change_types {
                body.row(row_height, |mut row| {
                    let rule_row = rule_table.get(&change_type.description);
                    // Unconfigured change types render with the default mode.
                    let effective_date_mode = rule_row
                        .map(|rule| rule.effective_date_mode)
                        .unwrap_or_default();

                    row.col(|ui| {
                        ui.label(&change_type.description);
                    });

                    row.col(|ui| match variant {
                        MatrixViewVariant::Readonly => {
                            ui.label(effective_date_mode_label(effective_date_mode));
                        }
                        MatrixViewVariant::Edit => {
                            ui.add_enabled_ui(rule_row.is_some(), |ui| {
                                egui::ComboBox::from_id_salt((
                                    "effective_date_mode",
                                    change_type.id.as_str(),
                                ))
                                .selected_text(effective_date_mode_label(effective_date_mode))
                                .show_ui(ui, |ui| {
                                    for mode in EffectiveDateMode::ALL {
                                        if ui
                                            .selectable_label(
                                                mode == effective_date_mode,
                                                effective_date_mode_label(mode),
                                            )
                                            .clicked()
                                        {
                                            set_mode_writer.send(SetEffectiveDateModeRequest {
                                                member_change_type_id: change_type.id.clone(),
                                                effective_date_mode: mode,
                                            });
                                        }
                                    }
                                });
                            });
                        }
                    });

                    for benefit_type in benefit_types {
                        row.col(|ui| {
                            let benefit_is_enabled = rule_row
                                .and_then(|rule| {
                                    rule.benefit_enabled.get(&benefit_type.key).copied()
                                })
                                .unwrap_or(false);

                            match variant {
                                MatrixViewVariant::Readonly => {
                                    if benefit_is_enabled {
                                        ui.colored_label(ENABLED_CHECK_COLOR, "✔");
                                    } else {
                                        ui.colored_label(egui::Color32::GRAY, "✘");
                                    }
                                }
                                MatrixViewVariant::Edit => {
                                    let mut is_enabled = benefit_is_enabled;
                                    if ui.checkbox(&mut is_enabled, "").changed() {
                                        set_benefit_writer.send(SetBenefitEnabledRequest {
                                            member_change_type_id: change_type.id.clone(),
                                            benefit_type_name: benefit_type.key.clone(),
                                            is_enabled,
                                        });
                                    }
                                }
                            }
                        });
                    }
                });
            }
        });
}
