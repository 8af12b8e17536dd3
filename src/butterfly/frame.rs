//! Per-frame view of a butterfly session for the canvas render callback.
//!
//! Nothing here knows about pixels. The page maps rows and columns to
//! coordinates; this module only decides what is drawn where and in which
//! role.

use serde::Serialize;

use super::stepper::{Phase, StepperState};

/// Invert an ordering: `rows[item]` is the row `item` occupies.
pub fn rows_by_item(order: &[usize]) -> Vec<usize> {
    let mut rows = vec![0; order.len()];
    for (row, &item) in order.iter().enumerate() {
        rows[item] = row;
    }
    rows
}

/// One line from a data item's node in column `from_stage` to its node in the next column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub data_index: usize,
    pub from_stage: usize,
    pub from_row: usize,
    pub to_row: usize,
}

/// Connections for every step revealed so far, column pair by column pair.
pub fn connections(state: &StepperState) -> Vec<Connection> {
    let stages = state.stages();
    let mut lines = Vec::with_capacity(state.current_stage() * state.fft_size().points());

    for k in 1..=state.current_stage() {
        let from = rows_by_item(&stages[k - 1]);
        let to = rows_by_item(&stages[k]);
        lines.extend(from.iter().zip(&to).enumerate().map(|(data_index, (&from_row, &to_row))| {
            Connection {
                data_index,
                from_stage: k - 1,
                from_row,
                to_row,
            }
        }));
    }
    lines
}

/// How a column's nodes are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Input,
    Intermediate,
    Output,
    /// Not revealed yet.
    Pending,
}

pub fn node_role(column: usize, state: &StepperState) -> NodeRole {
    if column > state.current_stage() {
        NodeRole::Pending
    } else if column == 0 {
        NodeRole::Input
    } else if column == state.max_stage() {
        NodeRole::Output
    } else {
        NodeRole::Intermediate
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub index: usize,
    pub role: NodeRole,
    pub order: Vec<usize>,
}

/// Everything the render callback reads for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot {
    pub fft_size: usize,
    pub stage: usize,
    pub max_stage: usize,
    pub phase: Phase,
    pub title: String,
    pub button_label: &'static str,
    pub show_index_labels: bool,
    pub columns: Vec<Column>,
    pub connections: Vec<Connection>,
}

impl FrameSnapshot {
    pub fn capture(state: &StepperState) -> Self {
        let columns = state
            .stages()
            .iter()
            .enumerate()
            .map(|(index, order)| Column {
                index,
                role: node_role(index, state),
                order: order.clone(),
            })
            .collect();

        FrameSnapshot {
            fft_size: state.fft_size().points(),
            stage: state.current_stage(),
            max_stage: state.max_stage(),
            phase: state.phase(),
            title: state.title(),
            button_label: state.button_label(),
            show_index_labels: state.fft_size().shows_index_labels(),
            columns,
            connections: connections(state),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::butterfly::size::FftSize;
    use crate::butterfly::stages::is_permutation;

    #[test]
    fn rows_invert_the_order() {
        assert_eq!(rows_by_item(&[0, 2, 1, 3]), vec![0, 2, 1, 3]);
        assert_eq!(rows_by_item(&[2, 0, 1]), vec![1, 2, 0]);
    }

    #[test]
    fn no_connections_before_first_step() {
        let state = StepperState::new(FftSize::N16);
        assert!(connections(&state).is_empty());
    }

    #[test]
    fn eight_point_first_step_connections() {
        let mut state = StepperState::new(FftSize::N8);
        state.advance();
        let lines = connections(&state);
        assert_eq!(lines.len(), 8);

        // identity -> [0, 2, 1, 3, 4, 6, 5, 7]
        let moved: Vec<(usize, usize, usize)> = lines
            .iter()
            .filter(|c| c.from_row != c.to_row)
            .map(|c| (c.data_index, c.from_row, c.to_row))
            .collect();
        assert_eq!(moved, vec![(1, 1, 2), (2, 2, 1), (5, 5, 6), (6, 6, 5)]);
    }

    #[test]
    fn every_item_connected_once_per_step() {
        let mut state = StepperState::new(FftSize::N32);
        while state.advance() {}
        let lines = connections(&state);
        assert_eq!(lines.len(), 32 * state.max_stage());

        for k in 0..state.max_stage() {
            let step: Vec<&Connection> = lines.iter().filter(|c| c.from_stage == k).collect();
            let items: Vec<usize> = step.iter().map(|c| c.data_index).collect();
            let targets: Vec<usize> = step.iter().map(|c| c.to_row).collect();
            assert!(is_permutation(&items), "step {k} items");
            assert!(is_permutation(&targets), "step {k} rows");
        }
    }

    #[test]
    fn roles_follow_progress() {
        let mut state = StepperState::new(FftSize::N16);
        let roles = |s: &StepperState| -> Vec<NodeRole> {
            (0..=s.max_stage()).map(|c| node_role(c, s)).collect()
        };
        assert_eq!(
            roles(&state),
            vec![NodeRole::Input, NodeRole::Pending, NodeRole::Pending]
        );
        state.advance();
        state.advance();
        assert_eq!(
            roles(&state),
            vec![NodeRole::Input, NodeRole::Intermediate, NodeRole::Output]
        );
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let mut state = StepperState::default();
        state.advance();
        let snapshot = FrameSnapshot::capture(&state);
        assert_eq!(snapshot.columns.len(), 2);
        assert_eq!(snapshot.connections.len(), 8);

        let json: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(json["fftSize"], 8);
        assert_eq!(json["maxStage"], 1);
        assert_eq!(json["phase"], "done");
        assert_eq!(json["buttonLabel"], "Next Step");
        assert_eq!(json["showIndexLabels"], true);
        assert_eq!(json["columns"][1]["role"], "output");
        assert_eq!(json["connections"][1]["toRow"], 2);
    }
}
