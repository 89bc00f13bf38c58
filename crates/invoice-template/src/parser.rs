//! Document JSON parsing

use crate::{CompanyProfile, InvoiceDocument, Result, TemplateError};

/// Parse an invoice document from JSON string
pub fn parse_document(json: &str) -> Result<InvoiceDocument> {
    serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))
}

/// Parse a company profile from JSON string
///
/// Missing fields fall back to the built-in profile.
pub fn parse_company(json: &str) -> Result<CompanyProfile> {
    serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocumentType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_document() {
        let json = r#"{
            "documentType": "QUOTE",
            "documentNumber": "2025010542Q",
            "issueDate": "JAN 5, 2025",
            "dueDate": "FEB 4, 2025",
            "billingParty": { "companyName": "Acme Corp", "email": "ap@acme.test" },
            "lineItems": [
                { "description": "Fundamental EE Core", "quantity": 1, "unitPrice": 673, "lineTotal": 673 }
            ],
            "subtotal": 673,
            "taxes": [
                { "label": "GST", "rate": 5, "amount": 33.65 }
            ],
            "grandTotal": 706.65
        }"#;

        let document = parse_document(json).unwrap();
        assert_eq!(document.document_type, DocumentType::Quote);
        assert_eq!(document.billing_party.company_name, "Acme Corp");
        assert_eq!(document.billing_party.phone, "");
        assert_eq!(document.shipping_party, Default::default());
        assert_eq!(document.line_items.len(), 1);
        assert_eq!(document.shipping_cost, 0.0);
        assert_eq!(document.currency_symbol, "US$");
        assert_eq!(document.taxes[0].amount, 33.65);
    }

    #[test]
    fn test_parse_document_missing_required_field() {
        let err = parse_document(r#"{ "documentType": "INVOICE" }"#).unwrap_err();
        assert!(matches!(err, TemplateError::ParseError(_)));
    }

    #[test]
    fn test_parse_document_unknown_type() {
        let json = r#"{
            "documentType": "RECEIPT",
            "documentNumber": "1",
            "issueDate": "",
            "dueDate": "",
            "grandTotal": 0
        }"#;
        assert!(parse_document(json).is_err());
    }

    #[test]
    fn test_parse_company() {
        let company = parse_company(r#"{ "eTransferEmail": "pay@other.test" }"#).unwrap();
        assert_eq!(company.e_transfer_email, "pay@other.test");
        assert_eq!(company.name, CompanyProfile::default().name);
    }
}
