// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{PathEl, Point, Size};
use radar_core::{MarkId, RetainedSurface};

use crate::{
    ChartChange, ChartEvent, ChartPart, DIMMED_AREA_OPACITY, Entity, HOVER_TRANSITION,
    HOVERED_AREA_OPACITY, LegendConfig, PointerAction, RadarChart, RadarConfig, RadarError,
    UPDATE_TRANSITION,
};

const AXES: [&str; 5] = [
    "Battery Life",
    "Brand",
    "Contract Cost",
    "Design And Quality",
    "Have Internet Connectivity",
];

fn phone(name: &str, values: [f64; 5]) -> Entity {
    Entity::new(name, AXES.into_iter().zip(values))
}

fn phones() -> Vec<Entity> {
    vec![
        phone("Samsung", [0.22, 0.28, 0.29, 0.17, 0.22]),
        phone("iPhone", [0.27, 0.16, 0.35, 0.13, 0.82]),
    ]
}

fn chart(config: RadarConfig) -> RadarChart<RetainedSurface> {
    RadarChart::new(phones(), RetainedSurface::new(), config).unwrap()
}

fn text(chart: &RadarChart<RetainedSurface>, part: ChartPart) -> String {
    chart
        .surface()
        .mark(part.id())
        .and_then(|m| m.as_text())
        .map(|t| t.joined())
        .unwrap_or_default()
}

fn vertex_count(chart: &RadarChart<RetainedSurface>, entity: usize) -> usize {
    let mark = chart
        .surface()
        .mark(ChartPart::BlobArea { entity }.id())
        .expect("blob area is drawn");
    mark.as_path()
        .expect("blob area is a path")
        .path
        .elements()
        .iter()
        .filter(|el| matches!(el, PathEl::MoveTo(_) | PathEl::LineTo(_)))
        .count()
}

fn area_opacity(chart: &RadarChart<RetainedSurface>, entity: usize) -> f64 {
    chart
        .surface()
        .mark(ChartPart::BlobArea { entity }.id())
        .and_then(|m| m.as_path())
        .map(|p| p.fill_opacity)
        .expect("blob area is drawn")
}

#[test]
fn initial_draw_places_every_part() {
    let chart = chart(RadarConfig::default());
    let surface = chart.surface();

    assert_eq!(surface.canvas(), Some(Size::new(640.0, 640.0)));
    assert_eq!(surface.batches().len(), 1, "one unanimated batch");
    assert_eq!(surface.last_transition(), None);

    assert_eq!(vertex_count(&chart, 0), 5);
    assert_eq!(vertex_count(&chart, 1), 5);
    for entity in 0..2 {
        for axis in 0..5 {
            assert!(surface.mark(ChartPart::Dot { entity, axis }.id()).is_some());
            assert!(surface.mark(ChartPart::HitArea { entity, axis }.id()).is_some());
        }
    }
    assert!(surface.mark(ChartPart::LegendTitle.id()).is_none());
    assert!(
        surface
            .mark(ChartPart::Tooltip.id())
            .and_then(|m| m.as_text())
            .is_some_and(|t| !t.visible),
        "tooltip starts hidden"
    );
}

#[test]
fn ring_labels_show_fractions_of_max_value() {
    let chart = chart(RadarConfig::default());
    assert_eq!(chart.max_value(), 0.82);
    assert_eq!(text(&chart, ChartPart::RingLabel { level: 1 }), "27.33%");
    assert_eq!(text(&chart, ChartPart::RingLabel { level: 2 }), "54.67%");
    assert_eq!(text(&chart, ChartPart::RingLabel { level: 3 }), "82.00%");
    assert!(chart.surface().mark(ChartPart::RingLabel { level: 4 }.id()).is_none());
}

#[test]
fn configured_floor_raises_max_value() {
    let low = vec![phone("a", [0.1, 0.2, 0.3, 0.1, 0.1])];
    let chart = RadarChart::new(
        low,
        RetainedSurface::new(),
        RadarConfig::new().with_max_value(0.5).with_unit(" pts").with_levels(5),
    )
    .unwrap();
    assert_eq!(chart.max_value(), 0.5);
    assert_eq!(text(&chart, ChartPart::RingLabel { level: 5 }), "50.00% pts");
}

#[test]
fn axis_labels_wrap_and_sit_past_the_rings() {
    let chart = chart(RadarConfig::default());
    let label = chart
        .surface()
        .mark(ChartPart::AxisLabel { axis: 4 }.id())
        .and_then(|m| m.as_text())
        .cloned()
        .unwrap();
    let lines: Vec<&str> = label.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(lines, ["Have", "Internet", "Connectivity"]);
    assert!((label.lines[0].dy - 0.35).abs() < 1e-9);
    assert!((label.lines[2].dy - 3.15).abs() < 1e-9);

    let up = chart.geometry().label_anchor(0);
    assert!((up.x - 320.0).abs() < 1e-9 && (up.y - (320.0 - 375.0)).abs() < 1e-9);
}

#[test]
fn empty_dataset_is_rejected() {
    let err = RadarChart::new(vec![], RetainedSurface::new(), RadarConfig::default()).unwrap_err();
    assert_eq!(err, RadarError::EmptyDataset);
}

#[test]
fn append_mismatch_leaves_chart_untouched() {
    let mut chart = chart(RadarConfig::default());
    let before = chart.dataset().clone();
    let err = chart
        .append_entity(Entity::new("x", [("Brand", 0.5)]))
        .unwrap_err();
    assert!(matches!(err, RadarError::AxisMismatch { .. }), "{err:?}");
    assert_eq!(chart.dataset(), &before);
    assert_eq!(chart.surface().batches().len(), 1);
}

#[test]
fn appended_entity_enters_on_update() {
    let mut chart = chart(RadarConfig::default().with_legend(LegendConfig::new()));
    chart
        .append_entity(phone("Nokia", [0.26, 0.10, 0.30, 0.14, 0.22]))
        .unwrap();
    assert!(
        chart
            .surface()
            .mark(ChartPart::BlobArea { entity: 2 }.id())
            .is_none(),
        "append alone does not redraw"
    );

    chart.update();
    assert_eq!(vertex_count(&chart, 2), 5);
    assert_eq!(text(&chart, ChartPart::LegendLabel { entity: 2 }), "Nokia");
    assert_eq!(chart.surface().last_transition(), Some(UPDATE_TRANSITION));
    assert_eq!(chart.max_value(), 0.82, "scale is fixed");
}

#[test]
fn hover_does_not_draw_entities_appended_since_the_last_update() {
    let mut chart = chart(RadarConfig::default().with_legend(LegendConfig::new()));
    chart
        .append_entity(phone("Nokia", [0.26, 0.10, 0.30, 0.14, 0.22]))
        .unwrap();
    assert_eq!(chart.laid_out_entities(), 2);

    assert_eq!(
        chart.dispatch(ChartEvent::PointEnter { entity: 2, axis: 0 }),
        Ok(false)
    );
    assert_eq!(chart.dispatch(ChartEvent::BlobEnter { entity: 2 }), Ok(false));
    assert_eq!(chart.tooltip_target(), None);
    assert_eq!(chart.hovered_entity(), None);

    assert_eq!(chart.dispatch(ChartEvent::BlobEnter { entity: 0 }), Ok(true));
    assert_eq!(chart.surface().last_transition(), Some(HOVER_TRANSITION));
    for part in [
        ChartPart::BlobArea { entity: 2 },
        ChartPart::HitArea { entity: 2, axis: 0 },
        ChartPart::LegendLabel { entity: 2 },
    ] {
        assert!(
            chart.surface().mark(part.id()).is_none(),
            "{part:?} is drawn before update"
        );
    }

    chart.update();
    assert_eq!(chart.laid_out_entities(), 3);
    assert_eq!(vertex_count(&chart, 2), 5);
    assert_eq!(
        chart.dispatch(ChartEvent::PointEnter { entity: 2, axis: 0 }),
        Ok(true)
    );
    assert_eq!(chart.tooltip_target(), Some((2, 0)));
}

#[test]
fn repeated_hover_reports_no_change() {
    let mut chart = chart(RadarConfig::default());
    assert_eq!(chart.dispatch(ChartEvent::BlobLeave), Ok(false));
    assert_eq!(chart.dispatch(ChartEvent::BlobEnter { entity: 1 }), Ok(true));
    assert_eq!(chart.dispatch(ChartEvent::BlobEnter { entity: 1 }), Ok(false));
    assert_eq!(
        chart.dispatch(ChartEvent::PointEnter { entity: 0, axis: 5 }),
        Ok(false)
    );
    assert_eq!(chart.surface().batches().len(), 2);
}

#[test]
fn replace_checks_axis_count_and_relabels() {
    let mut chart = chart(RadarConfig::default());
    let err = chart
        .replace_dataset(vec![Entity::new("x", [("a", 0.1), ("b", 0.2)])])
        .unwrap_err();
    assert_eq!(
        err,
        RadarError::AxisCountMismatch {
            expected: 5,
            found: 2
        }
    );

    let names = ["P", "Q", "R", "S", "T"];
    chart
        .replace_dataset(vec![Entity::new("only", names.into_iter().zip([0.5; 5]))])
        .unwrap();
    assert_eq!(chart.all_axis(), names);
    assert_eq!(text(&chart, ChartPart::AxisLabel { axis: 2 }), "R");
    assert!(
        chart
            .surface()
            .mark(ChartPart::BlobArea { entity: 1 }.id())
            .is_none(),
        "removed entity exits"
    );
}

#[test]
fn inversion_requires_the_feature_flag() {
    let mut chart = chart(RadarConfig::default());
    assert_eq!(chart.invert_values(None), Err(RadarError::InversionDisabled));

    // The context menu is left to the host instead.
    assert_eq!(
        chart.handle_pointer(
            ChartPart::AxisLabel { axis: 1 }.id(),
            PointerAction::ContextMenu
        ),
        Ok(false)
    );
    assert_eq!(chart.dispatch(ChartEvent::LabelContextMenu { axis: 1 }), Ok(false));
    assert_eq!(chart.dataset().entities()[0].value("Brand"), Some(0.28));
    assert_eq!(chart.surface().batches().len(), 1, "nothing was redrawn");
}

#[test]
fn inverting_twice_restores_the_dataset() {
    let mut chart = chart(RadarConfig::default().with_inverse_data(true));
    let before = chart.dataset().clone();
    chart.invert_values(None).unwrap();
    assert_eq!(chart.dataset().entities()[1].value("Brand"), Some(100.0 - 0.16));
    chart.invert_values(None).unwrap();
    for (a, b) in chart.dataset().entities().iter().zip(before.entities()) {
        for (p, q) in a.axes.iter().zip(&b.axes) {
            assert!((p.value - q.value).abs() < 1e-9, "{} {}", p.value, q.value);
        }
    }
    assert_eq!(chart.surface().last_transition(), Some(UPDATE_TRANSITION));
}

#[test]
fn label_context_menu_inverts_one_axis() {
    let mut chart = chart(RadarConfig::default().with_inverse_data(true));
    let handled = chart
        .handle_pointer(
            ChartPart::AxisLabel { axis: 1 }.id(),
            PointerAction::ContextMenu,
        )
        .unwrap();
    assert!(handled);
    let first = &chart.dataset().entities()[0];
    assert_eq!(first.value("Brand"), Some(100.0 - 0.28));
    assert_eq!(first.value("Battery Life"), Some(0.22));
}

#[test]
fn label_click_reorders_axes_and_labels_together() {
    let mut chart = chart(RadarConfig::default());
    assert!(
        chart
            .handle_pointer(ChartPart::AxisLabel { axis: 0 }.id(), PointerAction::Click)
            .unwrap()
    );
    assert_eq!(chart.all_axis()[..2], ["Brand", "Battery Life"]);
    for entity in chart.dataset().entities() {
        let order: Vec<&str> = entity.axis_names().collect();
        assert_eq!(order, chart.all_axis());
    }
    assert_eq!(text(&chart, ChartPart::AxisLabel { axis: 0 }), "Brand");

    assert_eq!(chart.reorder_axis(4), Ok(0));
    assert_eq!(chart.all_axis()[0], "Have Internet Connectivity");
    assert_eq!(
        chart.reorder_axis(5),
        Err(RadarError::AxisIndexOutOfRange { index: 5, len: 5 })
    );
}

#[test]
fn round_strokes_toggle_redraws_only_on_change() {
    let mut chart = chart(RadarConfig::default());
    assert!(!chart.round_strokes());
    chart.set_round_strokes(false);
    assert_eq!(chart.surface().batches().len(), 1);

    chart.set_round_strokes(true);
    assert!(chart.round_strokes());
    assert_eq!(chart.surface().batches().len(), 2);
    let area = chart
        .surface()
        .mark(ChartPart::BlobArea { entity: 0 }.id())
        .and_then(|m| m.as_path())
        .unwrap();
    assert!(
        area.path
            .elements()
            .iter()
            .any(|el| matches!(el, PathEl::CurveTo(..))),
        "smoothed outline"
    );
}

#[test]
fn blob_hover_dims_siblings() {
    let mut chart = chart(RadarConfig::default());
    chart
        .handle_pointer(ChartPart::BlobArea { entity: 1 }.id(), PointerAction::Enter)
        .unwrap();
    assert_eq!(chart.hovered_entity(), Some(1));
    assert_eq!(area_opacity(&chart, 1), HOVERED_AREA_OPACITY);
    assert_eq!(area_opacity(&chart, 0), DIMMED_AREA_OPACITY);
    assert_eq!(chart.surface().last_transition(), Some(HOVER_TRANSITION));

    chart.dispatch(ChartEvent::BlobLeave).unwrap();
    assert_eq!(area_opacity(&chart, 0), 0.35);
    assert_eq!(area_opacity(&chart, 1), 0.35);
}

#[test]
fn point_hover_shows_tooltip() {
    let mut chart = chart(RadarConfig::default().with_unit("!"));
    chart
        .handle_pointer(
            ChartPart::HitArea { entity: 1, axis: 4 }.id(),
            PointerAction::Enter,
        )
        .unwrap();
    let tooltip = chart
        .surface()
        .mark(ChartPart::Tooltip.id())
        .and_then(|m| m.as_text())
        .cloned()
        .unwrap();
    assert!(tooltip.visible);
    assert_eq!(tooltip.joined(), "82.00%!");
    let dot = chart.geometry().point(4, 0.82);
    assert_eq!(tooltip.pos, Point::new(dot.x - 10.0, dot.y - 10.0));

    chart.dispatch(ChartEvent::PointLeave).unwrap();
    assert_eq!(chart.tooltip_target(), None);
    assert!(!chart.surface().mark(ChartPart::Tooltip.id()).unwrap().as_text().unwrap().visible);
}

#[test]
fn foreign_marks_are_not_handled() {
    let mut chart = chart(RadarConfig::default());
    assert_eq!(chart.handle_pointer(MarkId(42), PointerAction::Click), Ok(false));
    assert_eq!(
        chart.handle_pointer(ChartPart::Dot { entity: 0, axis: 0 }.id(), PointerAction::Click),
        Ok(false)
    );
}

#[test]
fn rotation_reorders_legend() {
    let legend = LegendConfig::new().with_title("Phones");
    let mut chart = chart(RadarConfig::default().with_legend(legend));
    assert_eq!(text(&chart, ChartPart::LegendTitle), "Phones");
    assert_eq!(text(&chart, ChartPart::LegendLabel { entity: 0 }), "Samsung");
    chart.rotate_entities();
    assert_eq!(text(&chart, ChartPart::LegendLabel { entity: 0 }), "iPhone");
    assert_eq!(text(&chart, ChartPart::LegendLabel { entity: 1 }), "Samsung");
}

#[test]
fn listeners_see_successful_mutations() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut chart = chart(RadarConfig::default().with_inverse_data(true));
    let sink = Rc::clone(&seen);
    chart.on_change(move |change| sink.borrow_mut().push(change.clone()));

    chart.reorder_axis(1).unwrap();
    chart.invert_values(Some("Brand")).unwrap();
    chart.set_round_strokes(true);
    assert!(chart.append_entity(Entity::new("bad", [("x", 1.0)])).is_err());
    chart.rotate_entities();

    assert_eq!(
        *seen.borrow(),
        [
            ChartChange::AxisReordered { from: 1, to: 2 },
            ChartChange::ValuesInverted {
                axis: Some("Brand".into())
            },
            ChartChange::RoundStrokes(true),
            ChartChange::EntitiesRotated,
        ]
    );
}

#[test]
fn detach_unmounts_and_returns_the_surface() {
    let chart = chart(RadarConfig::default());
    let surface = chart.detach();
    assert!(!surface.is_mounted());
    assert!(surface.is_empty());
}
