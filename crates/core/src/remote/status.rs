//! Pure functions for classifying remote API status codes.

use super::RemoteErrorKind;

impl RemoteErrorKind {
    /// Maps an HTTP status code to its error category.
    ///
    /// - 400 -> `Validation`
    /// - 401 -> `Unauthorized`
    /// - 403 -> `Forbidden`
    /// - 404 -> `NotFound`
    /// - 409 -> `Conflict`
    /// - 5xx -> `Server`
    /// - anything else -> `Other`
    ///
    /// # Examples
    ///
    /// ```
    /// use notify_admin_core::remote::RemoteErrorKind;
    ///
    /// assert_eq!(RemoteErrorKind::from_status(404), RemoteErrorKind::NotFound);
    /// assert_eq!(RemoteErrorKind::from_status(502), RemoteErrorKind::Server);
    /// ```
    pub fn from_status(status_code: u16) -> Self {
        match status_code {
            400 => RemoteErrorKind::Validation,
            401 => RemoteErrorKind::Unauthorized,
            403 => RemoteErrorKind::Forbidden,
            404 => RemoteErrorKind::NotFound,
            409 => RemoteErrorKind::Conflict,
            500..=599 => RemoteErrorKind::Server,
            _ => RemoteErrorKind::Other,
        }
    }

    /// Returns true if the user can fix the request and try again.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, RemoteErrorKind::Validation | RemoteErrorKind::Conflict)
    }
}
