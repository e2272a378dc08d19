//! Enumerations stored as plain column values.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Employee gender, stored as an integer column.
///
/// Values outside the enumeration fail to decode when the row is read.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum Gender {
    #[sea_orm(num_value = 0)]
    Male,
    #[sea_orm(num_value = 1)]
    Female,
}
