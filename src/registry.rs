//! Ordered table of animation types selected by the state's type index.

use crate::animation::{AnimationType, TypeError};
use crate::state::State;
use heapless::Vec;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// The registry is full and cannot accept more types.
    Full,

    /// The requested type index is not registered.
    UnknownType { index: usize, len: usize },

    /// An animation type operation failed.
    Type(TypeError),
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RegistryError::Full => {
                write!(f, "registry is full, cannot add more animation types")
            }
            RegistryError::UnknownType { index, len } => {
                write!(
                    f,
                    "animation type {} is not registered (registry holds {})",
                    index, len
                )
            }
            RegistryError::Type(err) => {
                write!(f, "animation type error: {}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RegistryError {}

impl From<TypeError> for RegistryError {
    fn from(err: TypeError) -> Self {
        RegistryError::Type(err)
    }
}

/// Ordered, fixed-capacity table of animation types.
///
/// A type's position in the table is the index stored by
/// [`State::set_type`]. Types are only appended, so indices stay stable.
///
/// # Type Parameters
/// * `C` - Per-tick context passed to update routines
/// * `DESC` - Description capacity of each entry
/// * `HTML` - Settings fragment capacity of each entry
/// * `MAX_TYPES` - Maximum number of types this registry can hold
#[derive(Debug, Clone)]
pub struct TypeRegistry<C, const DESC: usize, const HTML: usize, const MAX_TYPES: usize> {
    types: Vec<AnimationType<C, DESC, HTML>, MAX_TYPES>,
}

impl<C, const DESC: usize, const HTML: usize, const MAX_TYPES: usize>
    TypeRegistry<C, DESC, HTML, MAX_TYPES>
{
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { types: Vec::new() }
    }

    /// Appends a type and returns its index.
    ///
    /// # Errors
    /// * `Full` - The registry already holds `MAX_TYPES` entries
    pub fn push(
        &mut self,
        anim_type: AnimationType<C, DESC, HTML>,
    ) -> Result<usize, RegistryError> {
        let index = self.types.len();
        self.types.push(anim_type).map_err(|_| RegistryError::Full)?;
        Ok(index)
    }

    /// Returns the type at `index`, if registered.
    pub fn get(&self, index: usize) -> Option<&AnimationType<C, DESC, HTML>> {
        self.types.get(index)
    }

    /// Returns the type at `index` for late binding of its fields.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut AnimationType<C, DESC, HTML>> {
        self.types.get_mut(index)
    }

    /// Returns the type selected by `state`, if registered.
    pub fn active(&self, state: &State) -> Option<&AnimationType<C, DESC, HTML>> {
        self.get(state.type_index())
    }

    /// Invokes the update routine of the type selected by `state`.
    ///
    /// # Errors
    /// * `UnknownType` - The state's type index is not registered
    /// * `Type(NotConfigured)` - The selected type has no update routine
    pub fn invoke_active(&self, state: &State, context: &C) -> Result<(), RegistryError> {
        let index = state.type_index();
        let anim_type = self.get(index).ok_or(RegistryError::UnknownType {
            index,
            len: self.len(),
        })?;
        Ok(anim_type.invoke(context)?)
    }

    /// Iterates over `(index, type)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &AnimationType<C, DESC, HTML>)> {
        self.types.iter().enumerate()
    }

    /// Returns the number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<C, const DESC: usize, const HTML: usize, const MAX_TYPES: usize> Default
    for TypeRegistry<C, DESC, HTML, MAX_TYPES>
{
    fn default() -> Self {
        Self::new()
    }
}
