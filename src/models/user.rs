//! Modelos de User, Account y Profile
//!
//! Mapean a las tablas users, accounts y profiles del schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de cuenta
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AccountType {
    Personal,
    Company,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Personal => "PERSONAL",
            AccountType::Company => "COMPANY",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "PERSONAL" => Some(AccountType::Personal),
            "COMPANY" => Some(AccountType::Company),
            _ => None,
        }
    }
}

/// Género del perfil
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Diverse,
    Unknown,
}

impl Gender {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "MALE" => Some(Gender::Male),
            "FEMALE" => Some(Gender::Female),
            "DIVERSE" => Some(Gender::Diverse),
            "UNKNOWN" => Some(Gender::Unknown),
            _ => None,
        }
    }
}

/// Preferencia de tema de la UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

impl ThemePreference {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "LIGHT" => Some(ThemePreference::Light),
            "DARK" => Some(ThemePreference::Dark),
            "SYSTEM" => Some(ThemePreference::System),
            _ => None,
        }
    }
}

/// User principal - mapea a la tabla users.
/// password_hash nunca sale por la API.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub email_norm: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Account asociada 1:1 al usuario
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub user_id: Uuid,
    pub account_type: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile opcional del usuario (se crea al primer acceso)
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub theme_preference: String,
    pub updated_at: DateTime<Utc>,
}
