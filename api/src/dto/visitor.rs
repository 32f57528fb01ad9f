use resume_core::{AccessType, NewVisitorAccess};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::handlers::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddVisitorAccessRequest {
    #[validate(length(min = 1, message = "access_type is required"))]
    pub access_type: String,

    #[validate(length(min = 1, message = "value is required"))]
    pub value: String,

    #[validate(length(min = 1, message = "access_key is required"))]
    pub access_key: String,
}

impl TryFrom<AddVisitorAccessRequest> for NewVisitorAccess {
    type Error = ApiError;

    fn try_from(request: AddVisitorAccessRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        let access_type = request
            .access_type
            .parse::<AccessType>()
            .map_err(ApiError::bad_request)?;

        Ok(NewVisitorAccess {
            access_type,
            value: request.value,
            access_key: request.access_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(access_type: &str, value: &str) -> AddVisitorAccessRequest {
        AddVisitorAccessRequest {
            access_type: access_type.to_string(),
            value: value.to_string(),
            access_key: "recruiter_key".to_string(),
        }
    }

    #[test]
    fn test_converts_valid_request() {
        let entry = NewVisitorAccess::try_from(request("password", "open-sesame")).unwrap();
        assert_eq!(entry.access_type, AccessType::Password);
        assert_eq!(entry.value, "open-sesame");
    }

    #[test]
    fn test_rejects_empty_and_unknown_fields() {
        assert!(NewVisitorAccess::try_from(request("password", "")).is_err());
        assert!(NewVisitorAccess::try_from(request("fingerprint", "x")).is_err());
    }
}
