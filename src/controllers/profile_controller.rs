//! Controller de perfil y cuenta

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::profile_dto::{
    AccountResponse, PatchAccountRequest, PatchProfileRequest, ProfileResponse,
};
use crate::models::user::{AccountType, Gender, ThemePreference};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::normalize_trimmed;

const MAX_NAME_LEN: usize = 64;
const MAX_PHONE_LEN: usize = 32;

pub struct ProfileController {
    users: UserRepository,
}

impl ProfileController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    pub async fn get_profile(&self, user_id: Uuid, email: String) -> Result<ProfileResponse, AppError> {
        let profile = self.users.get_or_create_profile(user_id).await?;

        Ok(ProfileResponse {
            email,
            profile: profile.into(),
        })
    }

    pub async fn patch_profile(
        &self,
        user_id: Uuid,
        email: String,
        request: PatchProfileRequest,
    ) -> Result<ProfileResponse, AppError> {
        if request.is_empty() {
            return Err(AppError::BadRequest("No changes".to_string()));
        }

        let current = self.users.get_or_create_profile(user_id).await?;

        let first_name = merge_string_field(request.first_name, current.first_name, MAX_NAME_LEN)?;
        let last_name = merge_string_field(request.last_name, current.last_name, MAX_NAME_LEN)?;
        let company = merge_string_field(request.company, current.company, MAX_NAME_LEN)?;
        let phone = merge_string_field(request.phone, current.phone, MAX_PHONE_LEN)?;

        let age = match request.age {
            None => current.age,
            Some(None) => None,
            Some(Some(raw)) => {
                if !raw.is_finite() {
                    return Err(AppError::BadRequest("age invalid".to_string()));
                }
                let rounded = raw.round();
                if !(0.0..=130.0).contains(&rounded) {
                    return Err(AppError::BadRequest("age invalid".to_string()));
                }
                Some(rounded as i32)
            }
        };

        let gender = match request.gender {
            None => current.gender,
            Some(None) => None,
            Some(Some(raw)) => {
                Gender::from_str(&raw)
                    .ok_or_else(|| AppError::BadRequest("gender invalid".to_string()))?;
                Some(raw)
            }
        };

        let theme_preference = match request.theme_preference {
            None => current.theme_preference,
            Some(raw) => {
                ThemePreference::from_str(&raw)
                    .ok_or_else(|| AppError::BadRequest("theme_preference invalid".to_string()))?;
                raw
            }
        };

        let profile = self
            .users
            .update_profile(
                user_id,
                first_name,
                last_name,
                company,
                age,
                gender,
                phone,
                theme_preference,
            )
            .await?;

        Ok(ProfileResponse {
            email,
            profile: profile.into(),
        })
    }

    pub async fn get_account(&self, user_id: Uuid) -> Result<AccountResponse, AppError> {
        let account = self
            .users
            .find_account(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))?;

        Ok(account.into())
    }

    pub async fn patch_account(
        &self,
        user_id: Uuid,
        request: PatchAccountRequest,
    ) -> Result<AccountResponse, AppError> {
        if let Some(account_type) = &request.account_type {
            AccountType::from_str(account_type)
                .ok_or_else(|| AppError::BadRequest("type invalid".to_string()))?;
        }

        let name = match request.name {
            None => None,
            Some(None) => Some(None),
            Some(Some(raw)) => Some(
                normalize_trimmed(Some(&raw), MAX_NAME_LEN)
                    .map_err(|_| AppError::BadRequest("name too long".to_string()))?,
            ),
        };

        let account = self
            .users
            .update_account(user_id, request.account_type, name)
            .await?;

        Ok(account.into())
    }
}

/// Mezclar un campo string tri-estado: ausente mantiene, null borra,
/// valor se normaliza (vacío también borra)
fn merge_string_field(
    patch: Option<Option<String>>,
    current: Option<String>,
    max_len: usize,
) -> Result<Option<String>, AppError> {
    match patch {
        None => Ok(current),
        Some(None) => Ok(None),
        Some(Some(raw)) => normalize_trimmed(Some(&raw), max_len)
            .map_err(|_| AppError::BadRequest("Value too long".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_current_when_absent() {
        let merged = merge_string_field(None, Some("Ana".to_string()), 64).unwrap();
        assert_eq!(merged, Some("Ana".to_string()));
    }

    #[test]
    fn test_merge_clears_on_explicit_null() {
        assert_eq!(merge_string_field(Some(None), Some("Ana".to_string()), 64).unwrap(), None);
    }

    #[test]
    fn test_merge_normalizes_value() {
        let merged = merge_string_field(Some(Some("  Ana  ".to_string())), None, 64).unwrap();
        assert_eq!(merged, Some("Ana".to_string()));
        assert_eq!(merge_string_field(Some(Some("   ".to_string())), None, 64).unwrap(), None);
        assert!(merge_string_field(Some(Some("x".repeat(65))), None, 64).is_err());
    }
}
