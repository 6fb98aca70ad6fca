use kennel_domain::{
    Booking, BookingStatus, BookingType, Entity, PaymentType, Pet, PetBreed, PetType, PointRule,
    PointTransaction, Refund, Voucher, ID,
};
use sqlx::{
    postgres::{PgArguments, PgRow},
    query::Query,
    types::Uuid,
    Postgres, Row,
};

/// Maps a stored type to its postgres table
pub trait PgRecord: Entity + Sized + Send + Sync + Unpin + 'static {
    const TABLE: &'static str;
    const ID_COLUMN: &'static str;

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error>;
    fn insert_query(&self) -> Query<'_, Postgres, PgArguments>;
}

fn get_id(row: &PgRow, column: &str) -> Result<ID, sqlx::Error> {
    row.try_get::<Uuid, _>(column).map(ID::from)
}

impl PgRecord for BookingStatus {
    const TABLE: &'static str = "booking_statuses";
    const ID_COLUMN: &'static str = "booking_status_uid";

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: get_id(row, Self::ID_COLUMN)?,
            name: row.try_get("name")?,
            is_deleted: row.try_get("is_deleted")?,
        })
    }

    fn insert_query(&self) -> Query<'_, Postgres, PgArguments> {
        sqlx::query(
            r#"
            INSERT INTO booking_statuses(booking_status_uid, name, is_deleted)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(*self.id.inner_ref())
        .bind(self.name.as_str())
        .bind(self.is_deleted)
    }
}

impl PgRecord for BookingType {
    const TABLE: &'static str = "booking_types";
    const ID_COLUMN: &'static str = "booking_type_uid";

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: get_id(row, Self::ID_COLUMN)?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            is_deleted: row.try_get("is_deleted")?,
        })
    }

    fn insert_query(&self) -> Query<'_, Postgres, PgArguments> {
        sqlx::query(
            r#"
            INSERT INTO booking_types(booking_type_uid, name, description, is_deleted)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(*self.id.inner_ref())
        .bind(self.name.as_str())
        .bind(self.description.as_str())
        .bind(self.is_deleted)
    }
}

impl PgRecord for PaymentType {
    const TABLE: &'static str = "payment_types";
    const ID_COLUMN: &'static str = "payment_type_uid";

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: get_id(row, Self::ID_COLUMN)?,
            name: row.try_get("name")?,
            is_deleted: row.try_get("is_deleted")?,
        })
    }

    fn insert_query(&self) -> Query<'_, Postgres, PgArguments> {
        sqlx::query(
            r#"
            INSERT INTO payment_types(payment_type_uid, name, is_deleted)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(*self.id.inner_ref())
        .bind(self.name.as_str())
        .bind(self.is_deleted)
    }
}

impl PgRecord for PointRule {
    const TABLE: &'static str = "point_rules";
    const ID_COLUMN: &'static str = "point_rule_uid";

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: get_id(row, Self::ID_COLUMN)?,
            name: row.try_get("name")?,
            points_per_unit: row.try_get("points_per_unit")?,
            minimum_spend: row.try_get("minimum_spend")?,
            is_deleted: row.try_get("is_deleted")?,
        })
    }

    fn insert_query(&self) -> Query<'_, Postgres, PgArguments> {
        sqlx::query(
            r#"
            INSERT INTO point_rules(point_rule_uid, name, points_per_unit, minimum_spend, is_deleted)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(*self.id.inner_ref())
        .bind(self.name.as_str())
        .bind(self.points_per_unit)
        .bind(self.minimum_spend)
        .bind(self.is_deleted)
    }
}

impl PgRecord for PetType {
    const TABLE: &'static str = "pet_types";
    const ID_COLUMN: &'static str = "pet_type_uid";

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: get_id(row, Self::ID_COLUMN)?,
            name: row.try_get("name")?,
            is_deleted: row.try_get("is_deleted")?,
        })
    }

    fn insert_query(&self) -> Query<'_, Postgres, PgArguments> {
        sqlx::query(
            r#"
            INSERT INTO pet_types(pet_type_uid, name, is_deleted)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(*self.id.inner_ref())
        .bind(self.name.as_str())
        .bind(self.is_deleted)
    }
}

impl PgRecord for PetBreed {
    const TABLE: &'static str = "pet_breeds";
    const ID_COLUMN: &'static str = "pet_breed_uid";

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: get_id(row, Self::ID_COLUMN)?,
            name: row.try_get("name")?,
            pet_type_id: get_id(row, "pet_type_uid")?,
            is_deleted: row.try_get("is_deleted")?,
        })
    }

    fn insert_query(&self) -> Query<'_, Postgres, PgArguments> {
        sqlx::query(
            r#"
            INSERT INTO pet_breeds(pet_breed_uid, name, pet_type_uid, is_deleted)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(*self.id.inner_ref())
        .bind(self.name.as_str())
        .bind(*self.pet_type_id.inner_ref())
        .bind(self.is_deleted)
    }
}

impl PgRecord for Pet {
    const TABLE: &'static str = "pets";
    const ID_COLUMN: &'static str = "pet_uid";

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: get_id(row, Self::ID_COLUMN)?,
            name: row.try_get("name")?,
            owner_name: row.try_get("owner_name")?,
            pet_type_id: get_id(row, "pet_type_uid")?,
            pet_breed_id: get_id(row, "pet_breed_uid")?,
            is_deleted: row.try_get("is_deleted")?,
        })
    }

    fn insert_query(&self) -> Query<'_, Postgres, PgArguments> {
        sqlx::query(
            r#"
            INSERT INTO pets(pet_uid, name, owner_name, pet_type_uid, pet_breed_uid, is_deleted)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(*self.id.inner_ref())
        .bind(self.name.as_str())
        .bind(self.owner_name.as_str())
        .bind(*self.pet_type_id.inner_ref())
        .bind(*self.pet_breed_id.inner_ref())
        .bind(self.is_deleted)
    }
}

impl PgRecord for Voucher {
    const TABLE: &'static str = "vouchers";
    const ID_COLUMN: &'static str = "voucher_uid";

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: get_id(row, Self::ID_COLUMN)?,
            code: row.try_get("code")?,
            points_required: row.try_get("points_required")?,
            discount_percent: row.try_get("discount_percent")?,
            is_deleted: row.try_get("is_deleted")?,
        })
    }

    fn insert_query(&self) -> Query<'_, Postgres, PgArguments> {
        sqlx::query(
            r#"
            INSERT INTO vouchers(voucher_uid, code, points_required, discount_percent, is_deleted)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(*self.id.inner_ref())
        .bind(self.code.as_str())
        .bind(self.points_required)
        .bind(self.discount_percent)
        .bind(self.is_deleted)
    }
}

impl PgRecord for Booking {
    const TABLE: &'static str = "bookings";
    const ID_COLUMN: &'static str = "booking_uid";

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        let voucher_id: Option<Uuid> = row.try_get("voucher_uid")?;
        Ok(Self {
            id: get_id(row, Self::ID_COLUMN)?,
            pet_id: get_id(row, "pet_uid")?,
            booking_status_id: get_id(row, "booking_status_uid")?,
            booking_type_id: get_id(row, "booking_type_uid")?,
            payment_type_id: get_id(row, "payment_type_uid")?,
            voucher_id: voucher_id.map(ID::from),
            start_ts: row.try_get("start_ts")?,
            end_ts: row.try_get("end_ts")?,
            created: row.try_get("created")?,
        })
    }

    fn insert_query(&self) -> Query<'_, Postgres, PgArguments> {
        sqlx::query(
            r#"
            INSERT INTO bookings(
                booking_uid, pet_uid, booking_status_uid, booking_type_uid,
                payment_type_uid, voucher_uid, start_ts, end_ts, created
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(*self.id.inner_ref())
        .bind(*self.pet_id.inner_ref())
        .bind(*self.booking_status_id.inner_ref())
        .bind(*self.booking_type_id.inner_ref())
        .bind(*self.payment_type_id.inner_ref())
        .bind(self.voucher_id.as_ref().map(|id| *id.inner_ref()))
        .bind(self.start_ts)
        .bind(self.end_ts)
        .bind(self.created)
    }
}

impl PgRecord for Refund {
    const TABLE: &'static str = "refunds";
    const ID_COLUMN: &'static str = "refund_uid";

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: get_id(row, Self::ID_COLUMN)?,
            booking_status_id: get_id(row, "booking_status_uid")?,
            amount: row.try_get("amount")?,
            reason: row.try_get("reason")?,
            created: row.try_get("created")?,
        })
    }

    fn insert_query(&self) -> Query<'_, Postgres, PgArguments> {
        sqlx::query(
            r#"
            INSERT INTO refunds(refund_uid, booking_status_uid, amount, reason, created)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(*self.id.inner_ref())
        .bind(*self.booking_status_id.inner_ref())
        .bind(self.amount)
        .bind(self.reason.as_str())
        .bind(self.created)
    }
}

impl PgRecord for PointTransaction {
    const TABLE: &'static str = "point_transactions";
    const ID_COLUMN: &'static str = "point_transaction_uid";

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: get_id(row, Self::ID_COLUMN)?,
            point_rule_id: get_id(row, "point_rule_uid")?,
            pet_id: get_id(row, "pet_uid")?,
            points: row.try_get("points")?,
            created: row.try_get("created")?,
        })
    }

    fn insert_query(&self) -> Query<'_, Postgres, PgArguments> {
        sqlx::query(
            r#"
            INSERT INTO point_transactions(point_transaction_uid, point_rule_uid, pet_uid, points, created)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(*self.id.inner_ref())
        .bind(*self.point_rule_id.inner_ref())
        .bind(*self.pet_id.inner_ref())
        .bind(self.points)
        .bind(self.created)
    }
}
