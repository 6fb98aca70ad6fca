use crate::shared::{
    entity::{Entity, ID},
    tombstone::{Deletable, DependentKind, EntityKind, References},
};
use serde::{Deserialize, Serialize};

/// How many reward points a customer earns per spent unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointRule {
    pub id: ID,
    pub name: String,
    pub points_per_unit: i64,
    /// Minimum spend in cents before the rule applies
    pub minimum_spend: i64,
    pub is_deleted: bool,
}

impl PointRule {
    pub fn new(name: impl Into<String>, points_per_unit: i64, minimum_spend: i64) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
            points_per_unit,
            minimum_spend,
            is_deleted: false,
        }
    }
}

impl Entity for PointRule {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Deletable for PointRule {
    const KIND: EntityKind = EntityKind::PointRule;
    const DEPENDENTS: &'static [DependentKind] = &[DependentKind::PointTransactions];

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

impl References for PointRule {
    fn foreign_keys(&self) -> Vec<(EntityKind, &ID)> {
        Vec::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub id: ID,
    pub code: String,
    pub points_required: i64,
    pub discount_percent: i32,
    pub is_deleted: bool,
}

impl Voucher {
    pub fn new(code: impl Into<String>, points_required: i64, discount_percent: i32) -> Self {
        Self {
            id: Default::default(),
            code: code.into(),
            points_required,
            discount_percent,
            is_deleted: false,
        }
    }
}

impl Entity for Voucher {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Deletable for Voucher {
    const KIND: EntityKind = EntityKind::Voucher;
    const DEPENDENTS: &'static [DependentKind] = &[DependentKind::Bookings];

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }

    fn display_name(&self) -> &str {
        &self.code
    }
}

impl References for Voucher {
    fn foreign_keys(&self) -> Vec<(EntityKind, &ID)> {
        Vec::new()
    }
}

/// Points earned by a pet's owner under a `PointRule`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointTransaction {
    pub id: ID,
    pub point_rule_id: ID,
    pub pet_id: ID,
    pub points: i64,
    pub created: i64,
}

impl Entity for PointTransaction {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl References for PointTransaction {
    fn foreign_keys(&self) -> Vec<(EntityKind, &ID)> {
        vec![
            (EntityKind::PointRule, &self.point_rule_id),
            (EntityKind::Pet, &self.pet_id),
        ]
    }
}
