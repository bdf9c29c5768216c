// src/domain/user/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, Sluggable};
use crate::domain::user::value_objects::{
    ApiTokenHash, Email, PasswordHash, Role, UserId, UserRecord,
};
use crate::domain::validation::{
    FieldErrors, NOT_BLANK, optional_date, optional_text, required_text,
};
use chrono::{DateTime, NaiveDate, Utc};

/// Descriptive fields of an account, everything except credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub designation: Option<String>,
    pub started_at: Option<NaiveDate>,
    pub location: Option<String>,
    pub skype: Option<String>,
    pub slack: Option<String>,
    pub description: Option<String>,
    pub avatar: Option<String>,
    pub hover_avatar: Option<String>,
}

impl Profile {
    pub const FIRST_NAME_MAX_CHARS: usize = 50;
    pub const MIDDLE_NAME_MAX_CHARS: usize = 255;
    pub const LAST_NAME_MAX_CHARS: usize = 255;
    pub const DESIGNATION_MAX_CHARS: usize = 50;
    pub const LOCATION_MAX_CHARS: usize = 50;
    pub const SKYPE_MAX_CHARS: usize = 50;
    pub const SLACK_MAX_CHARS: usize = 50;
    pub const DESCRIPTION_MAX_CHARS: usize = 700;

    /// Identifying text for the user's slug.
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.first_name, self.middle_name, self.last_name)
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_active: bool,
    pub profile: Profile,
    pub api_token_hash: Option<ApiTokenHash>,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn username(&self) -> &str {
        self.email.as_str()
    }

    pub fn full_name(&self) -> String {
        self.profile.full_name()
    }

    pub fn changes(&self) -> UserChanges {
        let p = &self.profile;
        UserChanges {
            email: Some(self.email.as_str().to_owned()),
            first_name: Some(p.first_name.clone()),
            middle_name: Some(p.middle_name.clone()),
            last_name: Some(p.last_name.clone()),
            designation: p.designation.clone(),
            started_at: p.started_at.map(|d| d.format("%Y-%m-%d").to_string()),
            location: p.location.clone(),
            skype: p.skype.clone(),
            slack: p.slack.clone(),
            description: p.description.clone(),
            avatar: p.avatar.clone(),
            hover_avatar: p.hover_avatar.clone(),
        }
    }

    /// Replace email and profile. Returns whether the full name changed.
    pub fn apply(&mut self, draft: UserDraft, now: DateTime<Utc>) -> bool {
        let name_changed = self.profile.full_name() != draft.profile.full_name();
        self.email = draft.email;
        self.profile = draft.profile;
        self.updated_at = Some(now);
        name_changed
    }

    pub fn set_password(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
    }
}

impl Sluggable for User {
    type Record = UserRecord;

    fn slug(&self) -> Option<&Slug> {
        Some(&self.slug)
    }

    fn set_slug(&mut self, slug: Slug) {
        self.slug = slug;
    }
}

/// Raw account fields as submitted by a client. `None` means "not provided";
/// a blank optional field, `started_at` included, clears it.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub designation: Option<String>,
    /// `YYYY-MM-DD`.
    pub started_at: Option<String>,
    pub location: Option<String>,
    pub skype: Option<String>,
    pub slack: Option<String>,
    pub description: Option<String>,
    pub avatar: Option<String>,
    pub hover_avatar: Option<String>,
}

impl UserChanges {
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            email: other.email.or(self.email),
            first_name: other.first_name.or(self.first_name),
            middle_name: other.middle_name.or(self.middle_name),
            last_name: other.last_name.or(self.last_name),
            designation: other.designation.or(self.designation),
            started_at: other.started_at.or(self.started_at),
            location: other.location.or(self.location),
            skype: other.skype.or(self.skype),
            slack: other.slack.or(self.slack),
            description: other.description.or(self.description),
            avatar: other.avatar.or(self.avatar),
            hover_avatar: other.hover_avatar.or(self.hover_avatar),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub email: Email,
    pub profile: Profile,
}

impl UserDraft {
    pub fn validate(changes: UserChanges) -> DomainResult<Self> {
        Self::validate_into(changes, FieldErrors::new())
    }

    /// Like [`Self::validate`], but reports alongside failures collected earlier.
    pub fn validate_into(changes: UserChanges, mut errors: FieldErrors) -> DomainResult<Self> {
        let email = errors.capture("email", Email::new(changes.email.unwrap_or_default()));
        let first_name = errors.capture(
            "first_name",
            required_text(changes.first_name.unwrap_or_default(), Some(Profile::FIRST_NAME_MAX_CHARS)),
        );
        let middle_name = errors.capture(
            "middle_name",
            required_text(changes.middle_name.unwrap_or_default(), Some(Profile::MIDDLE_NAME_MAX_CHARS)),
        );
        let last_name = errors.capture(
            "last_name",
            required_text(changes.last_name.unwrap_or_default(), Some(Profile::LAST_NAME_MAX_CHARS)),
        );
        let designation = errors.capture(
            "designation",
            optional_text(changes.designation, Some(Profile::DESIGNATION_MAX_CHARS)),
        );
        let started_at = errors.capture("started_at", optional_date(changes.started_at));
        let location = errors.capture(
            "location",
            optional_text(changes.location, Some(Profile::LOCATION_MAX_CHARS)),
        );
        let skype = errors.capture("skype", optional_text(changes.skype, Some(Profile::SKYPE_MAX_CHARS)));
        let slack = errors.capture("slack", optional_text(changes.slack, Some(Profile::SLACK_MAX_CHARS)));
        let description = errors.capture(
            "description",
            optional_text(changes.description, Some(Profile::DESCRIPTION_MAX_CHARS)),
        );
        let avatar = errors.capture("avatar", optional_text(changes.avatar, None));
        let hover_avatar = errors.capture("hover_avatar", optional_text(changes.hover_avatar, None));

        let (
            Some(email),
            Some(first_name),
            Some(middle_name),
            Some(last_name),
            Some(designation),
            Some(started_at),
            Some(location),
            Some(skype),
            Some(slack),
            Some(description),
            Some(avatar),
            Some(hover_avatar),
        ) = (
            email,
            first_name,
            middle_name,
            last_name,
            designation,
            started_at,
            location,
            skype,
            slack,
            description,
            avatar,
            hover_avatar,
        )
        else {
            if errors.is_empty() {
                errors.add("user", NOT_BLANK);
            }
            return Err(errors.into());
        };
        errors.into_result()?;

        Ok(Self {
            email,
            profile: Profile {
                first_name,
                middle_name,
                last_name,
                designation,
                started_at,
                location,
                skype,
                slack,
                description,
                avatar,
                hover_avatar,
            },
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_active: bool,
    pub profile: Profile,
    pub api_token_hash: Option<ApiTokenHash>,
    /// Unset until a slug has been assigned.
    pub slug: Option<Slug>,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        draft: UserDraft,
        password_hash: PasswordHash,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email: draft.email,
            password_hash,
            role,
            is_active: true,
            profile: draft.profile,
            api_token_hash: None,
            slug: None,
            created_at,
        }
    }

    pub fn with_api_token_hash(mut self, hash: ApiTokenHash) -> Self {
        self.api_token_hash = Some(hash);
        self
    }

    pub fn full_name(&self) -> String {
        self.profile.full_name()
    }
}

impl Sluggable for NewUser {
    type Record = UserRecord;

    fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }

    fn set_slug(&mut self, slug: Slug) {
        self.slug = Some(slug);
    }
}
