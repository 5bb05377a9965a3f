//! Tensor types and the encoder trait shared by observation encoders.
//!
//! These define the interface between the engine and learning code
//! (typically in Python via PyO3).

use serde::{Deserialize, Serialize};

use crate::core::GameState;

/// Cell value for a face-down card.
pub const FACE_DOWN: f32 = -1.0;

/// Cell value for an empty slot.
pub const EMPTY: f32 = 0.0;

/// Encoded game state as a flat tensor for neural network input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor (e.g. `[12, 104]` or `[12, 104, 2]`).
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a tensor of the given shape with every cell set to `EMPTY`.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![EMPTY; size],
            shape,
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Get element at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }

    /// Element at a multi-dimensional index, `None` if out of range.
    #[must_use]
    pub fn at(&self, index: &[usize]) -> Option<f32> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut flat = 0;
        for (&i, &dim) in index.iter().zip(&self.shape) {
            if i >= dim {
                return None;
            }
            flat = flat * dim + i;
        }
        self.get(flat)
    }

    /// Cells as `i8`. Every cell an encoder writes fits.
    #[must_use]
    pub fn to_i8(&self) -> Vec<i8> {
        self.tensor.iter().map(|&v| v as i8).collect()
    }
}

/// Encodes game state into tensors for neural network input.
///
/// Each encoder defines:
/// - How to convert state to a tensor (face-down cards stay hidden)
/// - The shape of the output tensor
/// - The size of the action space
pub trait StateEncoder: Send + Sync {
    /// Encode the game state.
    fn encode(&self, state: &GameState) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Get the total number of possible actions.
    ///
    /// This defines the size of a policy output vector.
    fn action_space_size(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_state_new() {
        let state = EncodedState::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
        assert_eq!(state.len(), 4);
        assert_eq!(state.shape, vec![2, 2]);
        assert_eq!(state.get(0), Some(1.0));
        assert_eq!(state.get(3), Some(4.0));
        assert_eq!(state.get(4), None);
    }

    #[test]
    fn test_at_multi_index() {
        let state = EncodedState::new((0..24).map(|v| v as f32).collect(), vec![2, 3, 4]);
        assert_eq!(state.at(&[0, 0, 0]), Some(0.0));
        assert_eq!(state.at(&[1, 2, 3]), Some(23.0));
        assert_eq!(state.at(&[1, 0, 2]), Some(14.0));
        assert_eq!(state.at(&[2, 0, 0]), None);
        assert_eq!(state.at(&[0, 0]), None);
    }

    #[test]
    fn test_zeros_and_i8() {
        let mut state = EncodedState::zeros(vec![3]);
        assert!(state.tensor.iter().all(|&v| v == EMPTY));

        state.tensor[1] = FACE_DOWN;
        state.tensor[2] = 52.0;
        assert_eq!(state.to_i8(), vec![0, -1, 52]);
    }
}
