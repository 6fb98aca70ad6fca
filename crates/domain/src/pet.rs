use crate::shared::{
    entity::{Entity, ID},
    tombstone::{Deletable, DependentKind, EntityKind, References},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetType {
    pub id: ID,
    pub name: String,
    pub is_deleted: bool,
}

impl PetType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
            is_deleted: false,
        }
    }
}

impl Entity for PetType {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Deletable for PetType {
    const KIND: EntityKind = EntityKind::PetType;
    const DEPENDENTS: &'static [DependentKind] =
        &[DependentKind::PetBreeds, DependentKind::Pets];

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl References for PetType {
    fn foreign_keys(&self) -> Vec<(EntityKind, &ID)> {
        Vec::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetBreed {
    pub id: ID,
    pub name: String,
    pub pet_type_id: ID,
    pub is_deleted: bool,
}

impl PetBreed {
    pub fn new(name: impl Into<String>, pet_type_id: ID) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
            pet_type_id,
            is_deleted: false,
        }
    }
}

impl Entity for PetBreed {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Deletable for PetBreed {
    const KIND: EntityKind = EntityKind::PetBreed;
    const DEPENDENTS: &'static [DependentKind] = &[DependentKind::Pets];

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl References for PetBreed {
    fn foreign_keys(&self) -> Vec<(EntityKind, &ID)> {
        vec![(EntityKind::PetType, &self.pet_type_id)]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: ID,
    pub name: String,
    pub owner_name: String,
    pub pet_type_id: ID,
    pub pet_breed_id: ID,
    pub is_deleted: bool,
}

impl Pet {
    pub fn new(
        name: impl Into<String>,
        owner_name: impl Into<String>,
        pet_type_id: ID,
        pet_breed_id: ID,
    ) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
            owner_name: owner_name.into(),
            pet_type_id,
            pet_breed_id,
            is_deleted: false,
        }
    }
}

impl Entity for Pet {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Deletable for Pet {
    const KIND: EntityKind = EntityKind::Pet;
    const DEPENDENTS: &'static [DependentKind] =
        &[DependentKind::Bookings, DependentKind::PointTransactions];

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl References for Pet {
    fn foreign_keys(&self) -> Vec<(EntityKind, &ID)> {
        vec![
            (EntityKind::PetType, &self.pet_type_id),
            (EntityKind::PetBreed, &self.pet_breed_id),
        ]
    }
}
