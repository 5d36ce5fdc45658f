//! User settings - the single `userSettings` object.

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Upper bound for a decoded avatar image.
pub const AVATAR_MAX_BYTES: usize = 5 * 1024 * 1024;

/// Profile fields consumed by the header and the settings form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub company: String,
    pub bio: String,
    /// Data-URL encoded image, or empty when no photo is set.
    pub avatar: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            company: "Tech Corp".to_string(),
            bio: "Analytics Dashboard Administrator".to_string(),
            avatar: String::new(),
        }
    }
}

/// Per-channel notification toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPrefs {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub weekly_report: bool,
    pub monthly_report: bool,
    pub sales_alerts: bool,
    pub customer_updates: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: false,
            weekly_report: true,
            monthly_report: true,
            sales_alerts: true,
            customer_updates: false,
        }
    }
}

/// Locale and formatting preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub language: String,
    pub timezone: String,
    pub date_format: String,
    pub currency: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            timezone: "UTC-5".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            currency: "USD".to_string(),
        }
    }
}

/// The whole settings object, persisted as one value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserSettings {
    pub profile: Profile,
    pub notifications: NotificationPrefs,
    pub preferences: Preferences,
}

impl UserSettings {
    /// Validate and set the profile avatar from a data URL.
    pub fn set_avatar(&mut self, data_url: &str) -> Result<(), AvatarError> {
        validate_avatar(data_url)?;
        self.profile.avatar = data_url.to_string();
        Ok(())
    }

    /// Remove the profile photo.
    pub fn clear_avatar(&mut self) {
        self.profile.avatar.clear();
    }
}

/// Rejection reasons for an uploaded avatar. Unlike storage corruption,
/// these are surfaced to the user rather than silently healed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarError {
    /// The data URL does not carry an image media type.
    NotAnImage,
    /// The payload is not valid base64.
    InvalidEncoding,
    /// The decoded image exceeds [`AVATAR_MAX_BYTES`].
    TooLarge { bytes: usize },
}

impl fmt::Display for AvatarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvatarError::NotAnImage => write!(f, "avatar must be an image file"),
            AvatarError::InvalidEncoding => write!(f, "avatar payload is not valid base64"),
            AvatarError::TooLarge { bytes } => write!(
                f,
                "avatar is {} bytes, larger than the {} byte limit",
                bytes, AVATAR_MAX_BYTES
            ),
        }
    }
}

impl std::error::Error for AvatarError {}

/// Check that a data URL holds a base64 image no larger than
/// [`AVATAR_MAX_BYTES`] once decoded.
pub fn validate_avatar(data_url: &str) -> Result<(), AvatarError> {
    let rest = data_url
        .strip_prefix("data:image/")
        .ok_or(AvatarError::NotAnImage)?;
    let payload = rest
        .split_once(";base64,")
        .map(|(_, payload)| payload)
        .ok_or(AvatarError::InvalidEncoding)?;

    let decoded = BASE64
        .decode(payload)
        .map_err(|_| AvatarError::InvalidEncoding)?;

    if decoded.len() > AVATAR_MAX_BYTES {
        return Err(AvatarError::TooLarge {
            bytes: decoded.len(),
        });
    }
    Ok(())
}
