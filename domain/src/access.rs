use crate::error::ValidationError;

/// Which page the controller is mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageKind {
    Admin,
    #[default]
    Dashboard,
}

impl PageKind {
    pub fn validate_upload(self) -> Result<(), ValidationError> {
        match self {
            PageKind::Admin => Ok(()),
            PageKind::Dashboard => Err(ValidationError::AdminRequired),
        }
    }
}
