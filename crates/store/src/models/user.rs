use curbside_core::types::{Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// Role of a user browsing and booking services.
pub const ROLE_CUSTOMER: &str = "customer";
/// Role of a user offering services through a [`super::MechanicProfile`].
pub const ROLE_MECHANIC: &str = "mechanic";

/// An identity record. Created on signup and immutable afterwards;
/// there is no deletion path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: String,
    pub avatar_url: Option<String>,
    /// External payment-gateway customer reference. Schema column only;
    /// no gateway integration exists in this service.
    pub stripe_customer_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
///
/// Email uniqueness is the caller's responsibility; the store does not
/// enforce it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    /// Defaults to `customer` when absent.
    pub role: Option<String>,
    pub avatar_url: Option<String>,
    pub stripe_customer_id: Option<String>,
}
