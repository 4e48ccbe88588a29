//! DTOs de perfil y cuenta

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::{Account, Profile};

/// Datos de perfil expuestos por la API
#[derive(Debug, Serialize)]
pub struct ProfileData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub theme_preference: String,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileData {
    fn from(profile: Profile) -> Self {
        Self {
            first_name: profile.first_name,
            last_name: profile.last_name,
            company: profile.company,
            age: profile.age,
            gender: profile.gender,
            phone: profile.phone,
            theme_preference: profile.theme_preference,
            updated_at: profile.updated_at,
        }
    }
}

/// Respuesta de GET/PATCH /profile
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub email: String,
    pub profile: ProfileData,
}

/// Patch parcial del perfil. Campos ausentes no cambian; null borra.
#[derive(Debug, Deserialize)]
pub struct PatchProfileRequest {
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub last_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub company: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub age: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub gender: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub phone: Option<Option<String>>,
    pub theme_preference: Option<String>,
}

impl PatchProfileRequest {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.company.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.phone.is_none()
            && self.theme_preference.is_none()
    }
}

/// Distinguir "campo ausente" (no tocar) de "null explícito" (borrar)
fn deserialize_explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    Ok(Some(Option::<T>::deserialize(deserializer)?))
}

/// Respuesta de cuenta
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub account_type: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            account_type: account.account_type,
            name: account.name,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Patch de cuenta
#[derive(Debug, Deserialize)]
pub struct PatchAccountRequest {
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub name: Option<Option<String>>,
}
