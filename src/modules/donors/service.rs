use anyhow::Context;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{DonorSummary, SearchDonorsDynamicParams, SearchDonorsParams};

/// Decodes the wire encoding of a blood group.
///
/// The trailing character is an Rh marker: `p` means positive, anything
/// else means negative. The group letters are uppercased, so `"Ap"` becomes
/// `"A+"` and `"om"` becomes `"O-"`. Returns `None` for input too short to
/// carry a marker.
pub fn normalize_blood_group(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let marker = raw.chars().last()?;
    let group = &raw[..raw.len() - marker.len_utf8()];
    if group.is_empty() {
        return None;
    }

    let sign = if marker == 'p' { '+' } else { '-' };
    Some(format!("{}{}", group.to_uppercase(), sign))
}

pub struct DonorService;

impl DonorService {
    /// Finds donors by blood group, optionally narrowed to a district.
    #[instrument(skip(db))]
    pub async fn search(
        db: &PgPool,
        params: &SearchDonorsParams,
    ) -> Result<Vec<DonorSummary>, AppError> {
        let raw = params
            .blood_group
            .as_deref()
            .ok_or_else(|| AppError::bad_request("blood_group is required"))?;
        let blood_group = normalize_blood_group(raw)
            .ok_or_else(|| AppError::bad_request("blood_group is not a recognized encoding"))?;

        let mut query = QueryBuilder::<Postgres>::new(
            "SELECT name, email, blood_group, district FROM users WHERE role <> 'admin' AND blood_group = ",
        );
        query.push_bind(blood_group);
        if let Some(district) = &params.district {
            query.push(" AND district = ").push_bind(district);
        }
        query.push(" ORDER BY name");

        query
            .build_query_as::<DonorSummary>()
            .fetch_all(db)
            .await
            .context("Failed to search donors")
            .map_err(AppError::database)
    }

    /// Finds donors by whatever combination of fields the caller provides.
    #[instrument(skip(db))]
    pub async fn search_dynamic(
        db: &PgPool,
        params: &SearchDonorsDynamicParams,
    ) -> Result<Vec<DonorSummary>, AppError> {
        let mut query = QueryBuilder::<Postgres>::new(
            "SELECT name, email, blood_group, district FROM users WHERE role <> 'admin'",
        );

        if let Some(raw) = params.blood_group.as_deref() {
            let blood_group = normalize_blood_group(raw)
                .ok_or_else(|| AppError::bad_request("blood_group is not a recognized encoding"))?;
            query.push(" AND blood_group = ").push_bind(blood_group);
        }
        if let Some(district) = &params.district {
            query.push(" AND district = ").push_bind(district);
        }
        if let Some(name) = &params.name {
            query
                .push(" AND name ILIKE ")
                .push_bind(format!("%{}%", name));
        }
        query.push(" ORDER BY name");

        query
            .build_query_as::<DonorSummary>()
            .fetch_all(db)
            .await
            .context("Failed to search donors")
            .map_err(AppError::database)
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_blood_group;

    #[test]
    fn test_positive_marker() {
        assert_eq!(normalize_blood_group("Ap").as_deref(), Some("A+"));
        assert_eq!(normalize_blood_group("ABp").as_deref(), Some("AB+"));
    }

    #[test]
    fn test_non_positive_marker_means_negative() {
        assert_eq!(normalize_blood_group("Om").as_deref(), Some("O-"));
        assert_eq!(normalize_blood_group("Bn").as_deref(), Some("B-"));
    }

    #[test]
    fn test_group_letters_uppercased() {
        assert_eq!(normalize_blood_group("abp").as_deref(), Some("AB+"));
        assert_eq!(normalize_blood_group("om").as_deref(), Some("O-"));
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(normalize_blood_group(" Ap ").as_deref(), Some("A+"));
    }

    #[test]
    fn test_too_short_inputs_rejected() {
        assert_eq!(normalize_blood_group(""), None);
        assert_eq!(normalize_blood_group("p"), None);
        assert_eq!(normalize_blood_group("m"), None);
    }
}
