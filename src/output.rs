use std::collections::HashSet;
use std::fmt::Write;
use tracing::debug;
use crate::parse::{strip_as_prefix, AuthorizationRecord};
use crate::Warnings;

pub const FUNCTION_NAME: &str = "is_aspa_valid";

/// Options for the generated BIRD function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Reject paths that no ASPA record covers instead of accepting them.
    pub strict: bool,
}

/// Renders the records as a BIRD2 filter function.
///
/// Every record becomes an independent `if` block that returns once its
/// customer appears in `bgp_path`, so when a customer is listed more than once
/// only its first block is ever evaluated by BIRD. Records are emitted exactly
/// in the order given.
pub fn output_bird(records: &[AuthorizationRecord], config: &GenerationConfig) -> String {
    let mut result = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(result, "function {} () {{", FUNCTION_NAME);

    for record in records {
        let asn = strip_as_prefix(&record.customer);
        let _ = writeln!(result, "   # does the AS path include {}?", record.customer);
        let _ = writeln!(result, "   if (bgp_path ~ [= * {} * =]) then {{", asn);
        let _ = writeln!(result, "       # does the AS path include [carrier's asn, {}]?", record.customer);
        for provider in &record.providers {
            let carrier = strip_as_prefix(provider);
            let _ = writeln!(result, "       if (bgp_path ~ [= * {} {} * =]) then return true;", carrier, asn);
        }
        result.push_str("       return false;\n");
        result.push_str("   }\n\n");
    }

    if config.strict {
        result.push_str("   # (strict mode) if no previous condition matches there exists no ASPA for the path; it is invalid.\n");
        result.push_str("   return false;\n");
    } else {
        result.push_str("   # to avoid breaking stuff, assume the path is valid if no ASA exists.\n");
        result.push_str("   return true;\n");
    }
    result.push_str("}\n");

    debug!("generated {} with {} customer blocks (strict: {})", FUNCTION_NAME, records.len(), config.strict);
    result
}

/// Findings that do not change the generated text but usually point at bad input.
pub fn collect_warnings(records: &[AuthorizationRecord]) -> Warnings {
    let mut warnings: Warnings = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for record in records {
        let customer = record.customer.as_str();
        if !customer.starts_with("AS") {
            warnings.push(format!("customer {} has no AS prefix, using it as is", customer));
        }
        if strip_as_prefix(customer).is_empty() {
            warnings.push(format!("customer {:?} has an empty AS number", customer));
        }
        if record.providers.is_empty() {
            warnings.push(format!("customer {} has no providers, every path containing it is invalid", customer));
        }
        for provider in &record.providers {
            if !provider.starts_with("AS") {
                warnings.push(format!("provider {} of customer {} has no AS prefix, using it as is", provider, customer));
            }
        }
        if !seen.insert(strip_as_prefix(customer)) {
            warnings.push(format!("customer {} is listed more than once, only its first entry takes effect", customer));
        }
    }
    warnings
}
