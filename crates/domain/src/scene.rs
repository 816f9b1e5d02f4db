//! Scene — an ordered, named batch of actions triggered on demand.
//!
//! Insertion order is execution order. Triggering lives in the application
//! layer and never mutates the scene.

use crate::action::Action;
use crate::error::{HomeSphereError, ValidationError};
use crate::id::SceneId;

#[derive(Debug, Clone)]
pub struct Scene {
    id: SceneId,
    name: String,
    description: String,
    actions: Vec<Action>,
}

impl Scene {
    /// Create a builder for constructing a [`Scene`].
    #[must_use]
    pub fn builder() -> SceneBuilder {
        SceneBuilder::default()
    }

    #[must_use]
    pub fn id(&self) -> SceneId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Actions in execution order. Empty when none were added.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Remove every action equal to `action`. Returns whether any was removed.
    pub fn remove_action(&mut self, action: &Action) -> bool {
        let before = self.actions.len();
        self.actions.retain(|a| a != action);
        self.actions.len() < before
    }

    /// # Errors
    ///
    /// Returns [`HomeSphereError::Validation`] when `name` is empty.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), HomeSphereError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        self.name = name;
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSphereError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), HomeSphereError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Scene`].
#[derive(Debug, Default)]
pub struct SceneBuilder {
    id: Option<SceneId>,
    name: Option<String>,
    description: Option<String>,
    actions: Vec<Action>,
}

impl SceneBuilder {
    #[must_use]
    pub fn id(mut self, id: SceneId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Consume the builder, validate, and return a [`Scene`].
    ///
    /// A missing id defaults to `0`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSphereError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Scene, HomeSphereError> {
        let scene = Scene {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            actions: self.actions,
        };
        scene.validate()?;
        Ok(scene)
    }
}
