//! Invoice document and company profile types

use serde::{Deserialize, Serialize};

/// Kind of billing document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    #[default]
    Invoice,
    Quote,
}

impl DocumentType {
    /// Banner word and file-name prefix
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Invoice => "INVOICE",
            DocumentType::Quote => "QUOTE",
        }
    }

    /// Prefix shown before the document number
    pub fn number_label(self) -> &'static str {
        match self {
            DocumentType::Invoice => "INV#",
            DocumentType::Quote => "QUO#",
        }
    }
}

/// Billing or shipping party
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Party {
    pub company_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl Party {
    /// Display lines for a recipient block
    ///
    /// Empty fields are dropped. The phone number is prefixed with "Phone ".
    pub fn display_lines(&self) -> Vec<String> {
        let phone = if self.phone.is_empty() {
            String::new()
        } else {
            format!("Phone {}", self.phone)
        };

        [
            self.company_name.clone(),
            self.address.clone(),
            phone,
            self.email.clone(),
        ]
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect()
    }
}

/// One row of the item table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    /// Rendered verbatim, never recomputed by the layout
    pub line_total: f64,
}

/// One tax row of the summary grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxRow {
    /// Free-text label (e.g. "769120726-RT0001 GST")
    pub label: String,
    /// Rate in percent
    #[serde(default)]
    pub rate: f64,
    pub amount: f64,
}

/// Finished invoice/quote record consumed by the layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDocument {
    pub document_type: DocumentType,
    pub document_number: String,
    /// Display string, not parsed
    pub issue_date: String,
    /// Display string, not parsed
    pub due_date: String,
    #[serde(default)]
    pub billing_party: Party,
    #[serde(default)]
    pub shipping_party: Party,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub shipping_cost: f64,
    #[serde(default)]
    pub taxes: Vec<TaxRow>,
    pub grand_total: f64,
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_currency() -> String {
    "US$".to_string()
}

/// A tax preset offered by the form layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxPreset {
    pub label: String,
    /// Rate in percent
    pub rate: f64,
}

/// Identity and payment details of the issuing company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyProfile {
    pub name: String,
    pub address: String,
    pub city: String,
    pub email: String,
    pub business_number: String,
    pub e_transfer_email: String,
    pub pos_note: String,
    pub thank_you: String,
    pub copyright: String,
    pub website: String,
    pub tax_presets: Vec<TaxPreset>,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: "EVO-IN-MOTION Technology Ltd.".to_string(),
            address: "180-6660 Graybar Rd.".to_string(),
            city: "Richmond, BC V6W 1H9".to_string(),
            email: "info@eimtechnology.com".to_string(),
            business_number: "769120726".to_string(),
            e_transfer_email: "evoinmotion@gmail.com".to_string(),
            pos_note: "Support POS payment for Credit Card, Alipay and Wechat, payable to EIM Technology"
                .to_string(),
            thank_you: "THANK YOU FOR YOUR BUSINESS!".to_string(),
            copyright: "Copyright © 2025 by EVO-IN-MOTION TECHNOLOGY LTD. All rights reserved."
                .to_string(),
            website: "www.eimtechnology.com".to_string(),
            tax_presets: vec![
                TaxPreset {
                    label: "769120726-RT0001 GST".to_string(),
                    rate: 5.0,
                },
                TaxPreset {
                    label: "PST-1113-5003 PST".to_string(),
                    rate: 7.0,
                },
            ],
        }
    }
}
