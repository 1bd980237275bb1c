//! Resizable panel splits (explorer, steps library, terminal).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Splitter {
    Explorer,
    Steps,
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    pub initial: u16,
    pub min: u16,
    pub max: u16,
}

impl SplitConfig {
    pub const fn new(initial: u16, min: u16, max: u16) -> Self {
        Self { initial, min, max }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    origin: u16,
    start: u16,
}

/// One draggable split. `position` is the panel size in cells along `axis`.
///
/// A reversed split measures its panel from the far edge, so dragging towards
/// the origin grows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSplit {
    axis: Axis,
    reverse: bool,
    min: u16,
    max: u16,
    position: u16,
    drag: Option<Drag>,
}

impl PanelSplit {
    pub fn new(axis: Axis, config: SplitConfig, reverse: bool) -> Self {
        let min = config.min.min(config.max);
        let max = config.max.max(config.min);
        Self {
            axis,
            reverse,
            min,
            max,
            position: config.initial.clamp(min, max),
            drag: None,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn position(&self) -> u16 {
        self.position
    }

    pub fn bounds(&self) -> (u16, u16) {
        (self.min, self.max)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn set_position(&mut self, position: u16) -> bool {
        let next = position.clamp(self.min, self.max);
        let changed = next != self.position;
        self.position = next;
        changed
    }

    pub fn begin_drag(&mut self, at: u16) -> bool {
        let changed = self.drag.is_none();
        self.drag = Some(Drag {
            origin: at,
            start: self.position,
        });
        changed
    }

    pub fn drag_to(&mut self, at: u16) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };

        let delta = i32::from(at) - i32::from(drag.origin);
        let delta = if self.reverse { -delta } else { delta };
        let next = (i32::from(drag.start) + delta).clamp(i32::from(self.min), i32::from(self.max));
        self.set_position(next as u16)
    }

    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub explorer_width: SplitConfig,
    pub steps_width: SplitConfig,
    pub terminal_height: SplitConfig,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            explorer_width: SplitConfig::new(30, 16, 60),
            steps_width: SplitConfig::new(26, 16, 60),
            terminal_height: SplitConfig::new(8, 4, 24),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutState {
    pub explorer: PanelSplit,
    pub steps: PanelSplit,
    pub terminal: PanelSplit,
}

impl LayoutState {
    pub fn new(settings: &LayoutSettings) -> Self {
        Self {
            explorer: PanelSplit::new(Axis::X, settings.explorer_width, false),
            steps: PanelSplit::new(Axis::X, settings.steps_width, true),
            terminal: PanelSplit::new(Axis::Y, settings.terminal_height, true),
        }
    }

    pub fn split(&self, splitter: Splitter) -> &PanelSplit {
        match splitter {
            Splitter::Explorer => &self.explorer,
            Splitter::Steps => &self.steps,
            Splitter::Terminal => &self.terminal,
        }
    }

    pub fn split_mut(&mut self, splitter: Splitter) -> &mut PanelSplit {
        match splitter {
            Splitter::Explorer => &mut self.explorer,
            Splitter::Steps => &mut self.steps,
            Splitter::Terminal => &mut self.terminal,
        }
    }

    /// The split currently being dragged, if any.
    pub fn dragging(&self) -> Option<Splitter> {
        [Splitter::Explorer, Splitter::Steps, Splitter::Terminal]
            .into_iter()
            .find(|&splitter| self.split(splitter).is_dragging())
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new(&LayoutSettings::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/layout.rs"]
mod tests;
