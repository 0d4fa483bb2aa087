use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::resource::application::domain::Resource;
use crate::shared::validation::{FieldErrors, PatchField, Text, Validator, WriteMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Certification {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub credential_url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CertificationPayload {
    #[serde(default)]
    pub name: PatchField<String>,

    #[serde(default)]
    pub issuer: PatchField<String>,

    #[serde(default)]
    pub issue_date: PatchField<String>,

    #[serde(default)]
    pub expiry_date: PatchField<String>,

    #[serde(default)]
    pub credential_url: PatchField<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificationChanges {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<Option<NaiveDate>>,
    pub credential_url: Option<String>,
}

impl Resource for Certification {
    type Payload = CertificationPayload;
    type Changes = CertificationChanges;
    const NAME: &'static str = "certification";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(
        payload: CertificationPayload,
        mode: WriteMode,
    ) -> Result<CertificationChanges, FieldErrors> {
        let mut v = Validator::new(mode);
        let changes = CertificationChanges {
            name: v.text("name", payload.name, Text::required().max(200)),
            issuer: v.text("issuer", payload.issuer, Text::required().max(200)),
            issue_date: v.date("issue_date", payload.issue_date, true),
            expiry_date: v.nullable_date("expiry_date", payload.expiry_date),
            credential_url: v.url(
                "credential_url",
                payload.credential_url,
                Text::optional().max(200),
            ),
        };
        v.finish(changes)
    }
}
