use std::fs;
use std::path::Path;
use json::JsonValue;
use tracing::debug;
use crate::error::WizardError;
use crate::Warnings;

type RecordsWithWarnings = (Vec<AuthorizationRecord>, Warnings);

/// One ASPA entry: the customer AS and the providers it authorizes as upstreams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRecord {
    pub customer: String,
    pub providers: Vec<String>,
    /// Trust anchor label, kept from the input but not used for generation.
    pub ta: Option<String>,
}

impl AuthorizationRecord {
    pub fn new(customer: impl Into<String>, providers: Vec<String>) -> Self {
        Self {
            customer: customer.into(),
            providers,
            ta: None,
        }
    }
}

/// Removes a single leading `AS`. Anything else is returned untouched.
pub fn strip_as_prefix(asn: &str) -> &str {
    asn.strip_prefix("AS").unwrap_or(asn)
}

pub fn read_aspa_records<P>(path: P) -> Result<RecordsWithWarnings, WizardError> where P: AsRef<Path> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| WizardError::Read {
        path: path.to_owned(),
        source,
    })?;
    debug!("read {} bytes from {}", data.len(), path.display());
    parse_aspa_document(&data, path)
}

/// Parses the relying-party JSON export. `path` is only used for error messages.
pub fn parse_aspa_document(data: &str, path: &Path) -> Result<RecordsWithWarnings, WizardError> {
    let document = json::parse(data).map_err(|source| WizardError::Parse {
        path: path.to_owned(),
        source,
    })?;

    let aspas = &document["aspas"];
    if aspas.is_null() {
        return Err(WizardError::MissingAspas { path: path.to_owned() });
    }
    if !aspas.is_array() {
        return Err(WizardError::InvalidRecord {
            path: path.to_owned(),
            reason: "`aspas` is not an array".to_owned(),
        });
    }

    let mut records = Vec::with_capacity(aspas.len());
    let mut warnings: Warnings = Vec::new();
    for (index, entry) in aspas.members().enumerate() {
        let record = build_record(entry, index, &mut warnings).map_err(|reason| WizardError::InvalidRecord {
            path: path.to_owned(),
            reason,
        })?;
        records.push(record);
    }
    debug!("parsed {} ASPA records", records.len());
    Ok((records, warnings))
}

fn build_record(entry: &JsonValue, index: usize, warnings: &mut Warnings) -> Result<AuthorizationRecord, String> {
    if !entry.is_object() {
        return Err(format!("entry #{} is not an object", index));
    }
    let customer = entry["customer"]
        .as_str()
        .ok_or_else(|| format!("entry #{} has no string `customer` field", index))?
        .to_owned();

    let providers = match &entry["providers"] {
        JsonValue::Null => {
            warnings.push(format!("entry #{} ({}) has no `providers` field, treating it as empty", index, customer));
            Vec::new()
        }
        JsonValue::Array(values) => {
            let mut providers = Vec::with_capacity(values.len());
            for value in values {
                let provider = value
                    .as_str()
                    .ok_or_else(|| format!("entry #{} ({}) lists a provider that is not a string", index, customer))?;
                providers.push(provider.to_owned());
            }
            providers
        }
        _ => return Err(format!("entry #{} ({}) has a `providers` field that is not an array", index, customer)),
    };

    Ok(AuthorizationRecord {
        customer,
        providers,
        ta: entry["ta"].as_str().map(str::to_owned),
    })
}
