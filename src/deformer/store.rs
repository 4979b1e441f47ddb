use slotmap::SlotMap;

use crate::error::{DeformerError, Result};
use crate::math::Point3;

use super::Deformer;

slotmap::new_key_type! {
    /// Unique identifier for a deformer in the store.
    pub struct DeformerId;
}

/// Arena that owns every deformer in a scene.
///
/// Edits go through [`deformer_mut`](Self::deformer_mut) and evaluation
/// through shared borrows, so a control-point edit always completes before
/// the next kernel pass reads it.
#[derive(Debug, Default)]
pub struct DeformerStore {
    deformers: SlotMap<DeformerId, Deformer>,
}

impl DeformerStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a deformer and returns its ID.
    pub fn add(&mut self, deformer: Deformer) -> DeformerId {
        self.deformers.insert(deformer)
    }

    /// Returns a reference to the deformer, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the deformer is not in the store.
    pub fn deformer(&self, id: DeformerId) -> Result<&Deformer> {
        self.deformers
            .get(id)
            .ok_or_else(|| DeformerError::NotFound.into())
    }

    /// Returns a mutable reference to the deformer, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the deformer is not in the store.
    pub fn deformer_mut(&mut self, id: DeformerId) -> Result<&mut Deformer> {
        self.deformers
            .get_mut(id)
            .ok_or_else(|| DeformerError::NotFound.into())
    }

    /// Removes a deformer and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the deformer is not in the store.
    pub fn remove(&mut self, id: DeformerId) -> Result<Deformer> {
        self.deformers
            .remove(id)
            .ok_or_else(|| DeformerError::NotFound.into())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deformers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deformers.is_empty()
    }

    /// Iterates over all deformers.
    pub fn iter(&self) -> impl Iterator<Item = (DeformerId, &Deformer)> {
        self.deformers.iter()
    }

    /// Evaluates one deformer, returning its deformed vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if the deformer is not in the store or its kernel
    /// parameters are invalid.
    pub fn evaluate(&self, id: DeformerId) -> Result<Vec<Point3>> {
        self.deformer(id)?.evaluate()
    }
}
