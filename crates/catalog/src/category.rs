use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use streaming_catalog_core::{Entity, EntityId, ValueObject};

use crate::error::EntityValidationError;
use crate::validation::validate_fields;

/// Categories start out active unless told otherwise.
const DEFAULT_IS_ACTIVE: bool = true;

/// Category identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub EntityId);

impl CategoryId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }

    /// Fresh, never-before-used identifier.
    pub fn generate() -> Self {
        Self(EntityId::new())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl core::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Input for creating a category, as received from an outer layer.
///
/// Any field may be missing; missing `is_active` means active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            is_active: None,
        }
    }
}

/// Changes to apply to an existing category.
///
/// A missing `description` keeps the current one; a missing `name` is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Entity: Category.
///
/// Every state this type can be observed in satisfies the field invariants;
/// `id` and `created_at` never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Create an active category.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, EntityValidationError> {
        Self::with_status(name, description, DEFAULT_IS_ACTIVE)
    }

    /// Create a category with an explicit activation state.
    pub fn with_status(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> Result<Self, EntityValidationError> {
        Self::build(Some(name.into()), Some(description.into()), is_active)
    }

    /// Create a category from boundary input whose fields may be absent.
    pub fn create(input: NewCategory) -> Result<Self, EntityValidationError> {
        Self::build(
            input.name,
            input.description,
            input.is_active.unwrap_or(DEFAULT_IS_ACTIVE),
        )
    }

    fn build(
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Result<Self, EntityValidationError> {
        let (name, description) = validate_fields(name, description)
            .inspect_err(|err| tracing::debug!(reason = %err, "category rejected"))?;

        let category = Self {
            id: CategoryId::generate(),
            name,
            description,
            is_active,
            created_at: Utc::now(),
        };

        tracing::debug!(
            category_id = %category.id,
            is_active = category.is_active,
            "category created"
        );
        Ok(category)
    }

    pub fn id_typed(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        tracing::debug!(category_id = %self.id, "category activated");
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        tracing::debug!(category_id = %self.id, "category deactivated");
    }

    /// Replace the name and, if given, the description.
    ///
    /// Either both fields change or neither does.
    pub fn update(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<(), EntityValidationError> {
        self.apply(UpdateCategory {
            name: Some(name.to_owned()),
            description: description.map(str::to_owned),
        })
    }

    /// Apply boundary input to this category (see [`UpdateCategory`]).
    pub fn apply(&mut self, changes: UpdateCategory) -> Result<(), EntityValidationError> {
        let description = changes
            .description
            .unwrap_or_else(|| self.description.clone());

        let (name, description) = validate_fields(changes.name, Some(description))
            .inspect_err(|err| {
                tracing::debug!(category_id = %self.id, reason = %err, "category update rejected")
            })?;

        self.name = name;
        self.description = description;
        tracing::debug!(category_id = %self.id, "category updated");
        Ok(())
    }

    /// Plain copy of the current state, for collaborators that store categories.
    pub fn snapshot(&self) -> CategorySnapshot {
        CategorySnapshot {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }

    /// Rebuild a category from a stored snapshot.
    ///
    /// Keeps the stored identity and creation time, neither of which may be
    /// empty; fields go through the same pipeline as construction.
    pub fn restore(snapshot: CategorySnapshot) -> Result<Self, EntityValidationError> {
        if snapshot.id.is_nil() {
            return Err(EntityValidationError::NilId);
        }
        if snapshot.created_at == DateTime::<Utc>::default() {
            return Err(EntityValidationError::NilCreatedAt);
        }

        let (name, description) = validate_fields(Some(snapshot.name), Some(snapshot.description))
            .inspect_err(|err| {
                tracing::debug!(category_id = %snapshot.id, reason = %err, "snapshot rejected")
            })?;

        Ok(Self {
            id: snapshot.id,
            name,
            description,
            is_active: snapshot.is_active,
            created_at: snapshot.created_at,
        })
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Serializable state of a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySnapshot {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl ValueObject for CategorySnapshot {}
