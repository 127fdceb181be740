// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The radar chart component.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use radar_core::{MarkId, RenderSurface, Scene, Transition};

use crate::config::RadarConfig;
use crate::curve::Interpolation;
use crate::data::{Dataset, Entity};
use crate::error::{RadarError, Result};
use crate::event::{ChartChange, ChartEvent, PointerAction};
use crate::geometry::RadarGeometry;
use crate::part::ChartPart;
use crate::render::{Frame, HOVER_TRANSITION, HoverState, UPDATE_TRANSITION};

type Listener = Box<dyn FnMut(&ChartChange)>;

/// A radar chart drawn onto a [`RenderSurface`].
///
/// Construction validates the dataset, mounts a root on the surface and draws
/// the chart. Mutations go through the methods below, which validate their
/// input and leave the chart untouched on error. [`RadarChart::detach`]
/// removes the chart and hands the surface back.
///
/// The value scale (`max_value`) is fixed at construction: later data changes
/// move points along it but never rescale it.
///
/// Entities appended since the last full layout stay off screen, even through
/// hover redraws, until [`RadarChart::update`] runs.
pub struct RadarChart<S: RenderSurface> {
    config: RadarConfig,
    dataset: Dataset,
    /// Entities drawn by the last full layout.
    laid_out: usize,
    geometry: RadarGeometry,
    interpolation: Interpolation,
    hover: HoverState,
    scene: Scene,
    surface: S,
    listeners: Vec<Listener>,
}

impl<S: RenderSurface + fmt::Debug> fmt::Debug for RadarChart<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadarChart")
            .field("config", &self.config)
            .field("dataset", &self.dataset)
            .field("laid_out", &self.laid_out)
            .field("geometry", &self.geometry)
            .field("interpolation", &self.interpolation)
            .field("surface", &self.surface)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<S: RenderSurface> RadarChart<S> {
    /// Builds the chart and draws it onto `surface` without animation.
    ///
    /// Fails if `entities` is empty, the first entity has no axes, or any
    /// entity's axis names differ from the first entity's.
    pub fn new(entities: Vec<Entity>, surface: S, config: RadarConfig) -> Result<Self> {
        let dataset = Dataset::new(entities).inspect_err(|err| {
            tracing::debug!(%err, "rejected radar chart dataset");
        })?;
        let max_value = config.max_value.max(dataset.data_max());
        let geometry = RadarGeometry::new(&config, dataset.axis_count(), max_value);
        let interpolation = Interpolation::from_round_strokes(config.round_strokes);

        let mut chart = Self {
            laid_out: dataset.len(),
            config,
            dataset,
            geometry,
            interpolation,
            hover: HoverState::default(),
            scene: Scene::new(),
            surface,
            listeners: Vec::new(),
        };
        chart.surface.mount(chart.config.canvas_size());
        chart.draw(None);
        tracing::debug!(
            entities = chart.dataset.len(),
            axes = chart.dataset.axis_count(),
            max_value,
            "radar chart constructed"
        );
        Ok(chart)
    }

    /// The configuration the chart was built with.
    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    /// The current dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The current axis names, in order.
    pub fn all_axis(&self) -> &[String] {
        self.dataset.all_axis()
    }

    /// The value of the outer ring.
    pub fn max_value(&self) -> f64 {
        self.geometry.max_value()
    }

    /// Angular width of one axis.
    pub fn angle_slice(&self) -> f64 {
        self.geometry.angle_slice()
    }

    /// The polar layout.
    pub fn geometry(&self) -> &RadarGeometry {
        &self.geometry
    }

    /// The surface the chart draws on.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The entity whose area is highlighted.
    pub fn hovered_entity(&self) -> Option<usize> {
        self.hover.blob
    }

    /// The `(entity, axis)` point whose value the tooltip shows.
    pub fn tooltip_target(&self) -> Option<(usize, usize)> {
        self.hover.point
    }

    /// Registers a callback run after every successful mutation.
    pub fn on_change(&mut self, listener: impl FnMut(&ChartChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Re-lays out the chart from the current dataset, animated.
    ///
    /// Entities appended since the last layout appear, removed ones
    /// disappear, and the legend follows the dataset.
    pub fn update(&mut self) {
        self.laid_out = self.dataset.len();
        self.draw(Some(UPDATE_TRANSITION));
    }

    /// Number of entities on screen: those present at the last full layout.
    pub fn laid_out_entities(&self) -> usize {
        self.laid_out
    }

    /// Appends `entity`. The chart is not redrawn until [`RadarChart::update`].
    ///
    /// Fails with [`RadarError::AxisMismatch`] unless the entity's axis names
    /// equal [`RadarChart::all_axis`], in order.
    pub fn append_entity(&mut self, entity: Entity) -> Result<()> {
        let name = entity.name.clone();
        self.dataset.append(entity).inspect_err(|err| {
            tracing::debug!(%err, entity = %name, "rejected appended entity");
        })?;
        let index = self.dataset.len() - 1;
        tracing::debug!(index, entity = %name, "appended entity");
        self.notify(&ChartChange::EntityAppended { index });
        Ok(())
    }

    /// Replaces the dataset and redraws.
    ///
    /// The first new entity must have as many axes as the chart; its axis
    /// names become the chart's axis names.
    pub fn replace_dataset(&mut self, entities: Vec<Entity>) -> Result<()> {
        self.dataset.replace(entities).inspect_err(|err| {
            tracing::debug!(%err, "rejected replacement dataset");
        })?;
        tracing::debug!(entities = self.dataset.len(), "replaced dataset");
        self.hover = HoverState::default();
        self.update();
        self.notify(&ChartChange::DatasetReplaced {
            entities: self.dataset.len(),
        });
        Ok(())
    }

    /// Replaces every value `v` with `100 - v`, on all axes or only on the
    /// axis named `axis`, and redraws.
    ///
    /// Fails with [`RadarError::InversionDisabled`] unless the configuration
    /// allows inversion.
    pub fn invert_values(&mut self, axis: Option<&str>) -> Result<()> {
        if !self.config.allow_inverse_data {
            tracing::debug!(?axis, "value inversion is disabled");
            return Err(RadarError::InversionDisabled);
        }
        self.dataset.invert(axis);
        tracing::debug!(?axis, "inverted values");
        self.update();
        self.notify(&ChartChange::ValuesInverted {
            axis: axis.map(String::from),
        });
        Ok(())
    }

    /// Moves the axis at `index` one step for every entity and redraws: the
    /// last axis swaps with the first, any other moves one position later.
    ///
    /// Returns the axis's new index.
    pub fn reorder_axis(&mut self, index: usize) -> Result<usize> {
        let to = self.dataset.reorder_axis(index).inspect_err(|err| {
            tracing::debug!(%err, "rejected axis reorder");
        })?;
        tracing::debug!(from = index, to, "reordered axis");
        self.hover.point = None;
        self.update();
        self.notify(&ChartChange::AxisReordered { from: index, to });
        Ok(to)
    }

    /// Whether blob outlines are smoothed.
    pub fn round_strokes(&self) -> bool {
        self.interpolation.is_round()
    }

    /// Selects smoothed or straight blob outlines, redrawing on change.
    pub fn set_round_strokes(&mut self, round: bool) {
        if round == self.round_strokes() {
            return;
        }
        self.interpolation = Interpolation::from_round_strokes(round);
        tracing::debug!(round, "changed outline interpolation");
        self.update();
        self.notify(&ChartChange::RoundStrokes(round));
    }

    /// Moves the first entity to the end of the dataset and redraws.
    pub fn rotate_entities(&mut self) {
        self.dataset.rotate_entities();
        tracing::debug!(entities = self.dataset.len(), "rotated entities");
        self.hover = HoverState::default();
        self.update();
        self.notify(&ChartChange::EntitiesRotated);
    }

    /// Runs the behavior bound to `event`.
    ///
    /// Returns whether the chart changed. A label context menu inverts its
    /// axis only when inversion is enabled and is ignored otherwise. Hover
    /// events naming an entity that is not on screen, or a missing axis, are
    /// ignored, as are hover changes that leave the state as it was.
    pub fn dispatch(&mut self, event: ChartEvent) -> Result<bool> {
        tracing::trace!(?event, "dispatching chart event");
        match event {
            ChartEvent::LabelClick { axis } => {
                self.reorder_axis(axis)?;
                Ok(true)
            }
            ChartEvent::LabelContextMenu { axis } => {
                if !self.config.allow_inverse_data {
                    return Ok(false);
                }
                let name = self.dataset.all_axis().get(axis).cloned().ok_or(
                    RadarError::AxisIndexOutOfRange {
                        index: axis,
                        len: self.dataset.axis_count(),
                    },
                )?;
                self.invert_values(Some(&name))?;
                Ok(true)
            }
            ChartEvent::BlobEnter { entity } => {
                if entity >= self.laid_out {
                    tracing::trace!(entity, "ignoring hover on an entity not on screen");
                    return Ok(false);
                }
                Ok(self.set_hover(HoverState {
                    blob: Some(entity),
                    ..self.hover
                }))
            }
            ChartEvent::BlobLeave => Ok(self.set_hover(HoverState {
                blob: None,
                ..self.hover
            })),
            ChartEvent::PointEnter { entity, axis } => {
                if entity >= self.laid_out || axis >= self.dataset.axis_count() {
                    tracing::trace!(entity, axis, "ignoring hover on a point not on screen");
                    return Ok(false);
                }
                Ok(self.set_hover(HoverState {
                    point: Some((entity, axis)),
                    ..self.hover
                }))
            }
            ChartEvent::PointLeave => Ok(self.set_hover(HoverState {
                point: None,
                ..self.hover
            })),
        }
    }

    /// Routes a host pointer action on mark `id` to the chart.
    ///
    /// Returns `Ok(false)` when the mark is not one of this chart's
    /// interactive parts or the action has no effect on it, so hosts can
    /// leave the native behavior (such as the context menu) in place.
    pub fn handle_pointer(&mut self, id: MarkId, action: PointerAction) -> Result<bool> {
        let Some(event) =
            ChartPart::from_id(id).and_then(|part| ChartEvent::from_pointer(part, action))
        else {
            return Ok(false);
        };
        self.dispatch(event)
    }

    /// Removes the chart from its surface and returns the surface.
    pub fn detach(mut self) -> S {
        self.surface.unmount();
        tracing::debug!("radar chart detached");
        self.surface
    }

    /// Redraws with the hover transition when `hover` differs from the
    /// current state.
    fn set_hover(&mut self, hover: HoverState) -> bool {
        if hover == self.hover {
            return false;
        }
        self.hover = hover;
        self.draw(Some(HOVER_TRANSITION));
        true
    }

    fn draw(&mut self, transition: Option<Transition>) {
        let marks = Frame {
            config: &self.config,
            dataset: &self.dataset,
            laid_out: self.laid_out,
            geometry: &self.geometry,
            interpolation: self.interpolation,
            hover: self.hover,
            measurer: self.surface.measurer(),
        }
        .marks();
        let diffs = self.scene.tick(marks);
        tracing::trace!(diffs = diffs.len(), ?transition, "applying radar chart diffs");
        self.surface.apply(&diffs, transition);
    }

    fn notify(&mut self, change: &ChartChange) {
        for listener in &mut self.listeners {
            listener(change);
        }
    }
}
