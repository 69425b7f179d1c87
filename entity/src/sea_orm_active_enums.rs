use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Access level of a user account.
///
/// Stored and serialized with the Portuguese identifiers used by existing clients.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum UserLevel {
    #[sea_orm(string_value = "administrador")]
    #[serde(rename = "administrador")]
    Administrator,
    #[sea_orm(string_value = "engenheiro")]
    #[serde(rename = "engenheiro")]
    Engineer,
    #[sea_orm(string_value = "operador")]
    #[serde(rename = "operador")]
    Operator,
}

/// Access levels from most to least privileged.
pub const ACCESS_HIERARCHY: [UserLevel; 3] = [
    UserLevel::Administrator,
    UserLevel::Engineer,
    UserLevel::Operator,
];

impl UserLevel {
    /// Position in [`ACCESS_HIERARCHY`], lower means more privilege
    pub fn rank(&self) -> usize {
        ACCESS_HIERARCHY
            .iter()
            .position(|level| level == self)
            .unwrap_or(ACCESS_HIERARCHY.len())
    }

    /// Returns true if this level grants at least the access of `required`
    pub fn has_permission(&self, required: UserLevel) -> bool {
        self.rank() <= required.rank()
    }

    /// Display name shown to users, e.g. `Administrador`
    pub fn label(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrador",
            Self::Engineer => "Engenheiro",
            Self::Operator => "Operador",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AircraftStatus {
    #[sea_orm(string_value = "Pré-produção")]
    #[serde(rename = "Pré-produção")]
    PreProduction,
    #[sea_orm(string_value = "Em Produção (Fase 1/6)")]
    #[serde(rename = "Em Produção (Fase 1/6)")]
    ProductionPhaseOne,
    #[sea_orm(string_value = "Em Produção (Fase 3/6)")]
    #[serde(rename = "Em Produção (Fase 3/6)")]
    ProductionPhaseThree,
    #[sea_orm(string_value = "Testes Finais")]
    #[serde(rename = "Testes Finais")]
    FinalTests,
    #[sea_orm(string_value = "Concluído / Entregue")]
    #[serde(rename = "Concluído / Entregue")]
    Delivered,
}

/// Lifecycle of a production task: pending, in progress, completed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TaskStatus {
    #[sea_orm(string_value = "Pendente")]
    #[serde(rename = "Pendente")]
    Pending,
    #[sea_orm(string_value = "Em Andamento")]
    #[serde(rename = "Em Andamento")]
    InProgress,
    #[sea_orm(string_value = "Concluída")]
    #[serde(rename = "Concluída")]
    Completed,
}

/// Origin of a part.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum PartType {
    #[sea_orm(string_value = "Nacional")]
    #[serde(rename = "Nacional")]
    Domestic,
    #[sea_orm(string_value = "Importada")]
    #[serde(rename = "Importada")]
    Imported,
}

/// Supply lifecycle of a part.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum PartStatus {
    #[sea_orm(string_value = "Em Produção")]
    #[serde(rename = "Em Produção")]
    InProduction,
    #[sea_orm(string_value = "Em Transporte")]
    #[serde(rename = "Em Transporte")]
    InTransit,
    #[sea_orm(string_value = "Pronta para Uso")]
    #[serde(rename = "Pronta para Uso")]
    ReadyForUse,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TestType {
    #[sea_orm(string_value = "Elétrico")]
    #[serde(rename = "Elétrico")]
    Electrical,
    #[sea_orm(string_value = "Hidráulico")]
    #[serde(rename = "Hidráulico")]
    Hydraulic,
    #[sea_orm(string_value = "Aerodinâmico")]
    #[serde(rename = "Aerodinâmico")]
    Aerodynamic,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TestResult {
    #[sea_orm(string_value = "Aprovado")]
    #[serde(rename = "Aprovado")]
    Approved,
    #[sea_orm(string_value = "Reprovado")]
    #[serde(rename = "Reprovado")]
    Failed,
}
