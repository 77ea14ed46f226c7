//! This module makes it possible to represent LinkedIn URNs and IDs with type
//! safety and almost no overhead.
//!
//! ## Concrete IDs
//!
//! The trait [`Id`] is the central element of this module. It's implemented
//! by different kinds of ID ([`PersonId`], [`OrganizationId`], [`ShareId`],
//! [`UgcPostId`], [`ImageId`] and [`VideoId`]). All of them carry the bare
//! identifier and know which [`Entity`] they belong to, so they can be
//! formatted back into their URN:
//!
//! ```
//! use linkedin_model::{Id, OrganizationId};
//!
//! let id = OrganizationId::from_urn("urn:li:organization:2414183").unwrap();
//! assert_eq!(id.id(), "2414183");
//! assert_eq!(id.urn(), "urn:li:organization:2414183");
//!
//! let id = OrganizationId::from_id_or_urn("2414183").unwrap();
//! assert_eq!(id.to_string(), "urn:li:organization:2414183");
//!
//! assert!(OrganizationId::from_urn("urn:li:person:abc").is_err());
//! ```
//!
//! ## Polymorphic IDs
//!
//! Posts and shares can be authored by members or by organizations.
//! [`AuthorId`] groups up both kinds so that they can be used in the same
//! place; the [`Id`] methods are dispatched to the concrete type.

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use thiserror::Error;

use std::{fmt, str::FromStr};

/// The URN prefix shared by every LinkedIn entity.
pub const URN_PREFIX: &str = "urn:li:";

/// LinkedIn URN or ID parsing error
///
/// See also [`Id`] for details.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display, Error)]
pub enum IdError {
    /// LinkedIn URN prefix is not `urn:li:`.
    InvalidPrefix,
    /// LinkedIn URN can't be split into type and id parts (e.g., it has
    /// invalid separator).
    InvalidFormat,
    /// LinkedIn URN has invalid type name, or id has invalid type in a given
    /// context (e.g. a method expects an organization id, but a person id is
    /// provided).
    InvalidType,
    /// LinkedIn id is invalid (empty or contains invalid characters).
    InvalidId,
}

/// The kind of entity a URN points to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum Entity {
    Person,
    Organization,
    Share,
    UgcPost,
    Image,
    Video,
}

/// The main interface for an ID.
///
/// See the [module level documentation] for more information.
///
/// [module level documentation]: [`crate::idtypes`]
#[enum_dispatch]
pub trait Id {
    /// Returns the inner LinkedIn object ID, which is guaranteed to be valid
    /// for its type.
    fn id(&self) -> &str;

    /// The entity this ID belongs to.
    fn entity(&self) -> Entity;

    /// The full URN, e.g. `urn:li:organization:123`.
    fn urn(&self) -> String {
        format!("{URN_PREFIX}{}:{}", self.entity(), self.id())
    }
}

/// Splits a URN into its entity and its bare identifier.
pub fn parse_urn(urn: &str) -> Result<(Entity, &str), IdError> {
    let rest = urn.strip_prefix(URN_PREFIX).ok_or(IdError::InvalidPrefix)?;
    let (entity, id) = rest.split_once(':').ok_or(IdError::InvalidFormat)?;
    let entity = Entity::from_str(entity).map_err(|_| IdError::InvalidType)?;

    Ok((entity, id))
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

macro_rules! define_idtypes {
    ($($entity:ident => $name:ident),+) => {
        $(
            #[doc = concat!("ID of a LinkedIn `", stringify!($entity), "`.")]
            #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
            #[serde(try_from = "String", into = "String")]
            pub struct $name(String);

            impl $name {
                /// Initializes the ID from its bare identifier, without the
                /// URN prefix.
                pub fn from_id(id: impl Into<String>) -> Result<Self, IdError> {
                    let id = id.into();
                    if is_valid_id(&id) {
                        Ok(Self(id))
                    } else {
                        Err(IdError::InvalidId)
                    }
                }

                /// Parses a full URN, checking that it belongs to this type.
                pub fn from_urn(urn: &str) -> Result<Self, IdError> {
                    match parse_urn(urn)? {
                        (Entity::$entity, id) => Self::from_id(id),
                        _ => Err(IdError::InvalidType),
                    }
                }

                /// Accepts either a URN or a bare identifier.
                pub fn from_id_or_urn(id_or_urn: &str) -> Result<Self, IdError> {
                    if id_or_urn.starts_with(URN_PREFIX) {
                        Self::from_urn(id_or_urn)
                    } else {
                        Self::from_id(id_or_urn)
                    }
                }
            }

            impl Id for $name {
                fn id(&self) -> &str {
                    &self.0
                }

                fn entity(&self) -> Entity {
                    Entity::$entity
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.urn())
                }
            }

            impl FromStr for $name {
                type Err = IdError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::from_id_or_urn(s)
                }
            }

            impl TryFrom<String> for $name {
                type Error = IdError;

                fn try_from(s: String) -> Result<Self, Self::Error> {
                    Self::from_id_or_urn(&s)
                }
            }

            impl From<$name> for String {
                fn from(id: $name) -> Self {
                    id.urn()
                }
            }
        )+
    };
}

define_idtypes!(
    Person => PersonId,
    Organization => OrganizationId,
    Share => ShareId,
    UgcPost => UgcPostId,
    Image => ImageId,
    Video => VideoId
);

/// Author of a post or share: either a member or an organization.
#[enum_dispatch(Id)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AuthorId {
    PersonId,
    OrganizationId,
}

impl AuthorId {
    pub fn from_urn(urn: &str) -> Result<Self, IdError> {
        match parse_urn(urn)? {
            (Entity::Person, id) => PersonId::from_id(id).map(Into::into),
            (Entity::Organization, id) => OrganizationId::from_id(id).map(Into::into),
            _ => Err(IdError::InvalidType),
        }
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.urn())
    }
}

impl TryFrom<String> for AuthorId {
    type Error = IdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_urn(&s)
    }
}

impl From<AuthorId> for String {
    fn from(id: AuthorId) -> Self {
        id.urn()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_urn() {
        assert_eq!(
            parse_urn("urn:li:ugcPost:6844785523593134080"),
            Ok((Entity::UgcPost, "6844785523593134080"))
        );
        assert_eq!(parse_urn("li:person:1"), Err(IdError::InvalidPrefix));
        assert_eq!(parse_urn("urn:li:person"), Err(IdError::InvalidFormat));
        assert_eq!(parse_urn("urn:li:company:1"), Err(IdError::InvalidType));
    }

    #[test]
    fn test_wrong_entity_is_rejected() {
        assert_eq!(
            ShareId::from_urn("urn:li:organization:1"),
            Err(IdError::InvalidType)
        );
        assert_eq!(PersonId::from_id(""), Err(IdError::InvalidId));
        assert_eq!(PersonId::from_id("a b"), Err(IdError::InvalidId));
    }

    #[test]
    fn test_image_urn() {
        let id = ImageId::from_urn("urn:li:image:C4E10AQFoyyAjHPMQuQ").unwrap();
        assert_eq!(id.id(), "C4E10AQFoyyAjHPMQuQ");
        assert_eq!(id.entity(), Entity::Image);
    }

    #[test]
    fn test_author_dispatch() {
        let author = AuthorId::from_urn("urn:li:organization:5515715").unwrap();
        assert_eq!(author.entity(), Entity::Organization);
        assert_eq!(author.id(), "5515715");
        assert!(matches!(author, AuthorId::OrganizationId(_)));

        assert_eq!(
            AuthorId::from_urn("urn:li:share:1"),
            Err(IdError::InvalidType)
        );
    }

    #[test]
    fn test_ids_serialize_as_urns() {
        let author: AuthorId = PersonId::from_id("abc123").unwrap().into();
        let json = serde_json::to_string(&author).unwrap();
        assert_eq!(json, r#""urn:li:person:abc123""#);

        let parsed: AuthorId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, author);

        let video: VideoId = serde_json::from_str(r#""urn:li:video:C5F10AQGKQg""#).unwrap();
        assert_eq!(video.id(), "C5F10AQGKQg");
    }
}
