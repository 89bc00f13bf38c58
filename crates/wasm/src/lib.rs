//! WASM bindings for the invoice editor
//!
//! This crate provides a JavaScript-friendly API for:
//! - Editing an invoice or quote with live totals
//! - Rendering the current state to PDF bytes
//! - Rendering a standalone document object
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { InvoiceEditor } from 'invoice-wasm';
//!
//! await init();
//!
//! const editor = new InvoiceEditor();
//! editor.setBillingField('companyName', 'Acme Corp');
//! const id = editor.addItem();
//! editor.setItemQuantity(id, '2');
//! editor.setItemUnitPrice(id, '19.99');
//!
//! // Logo bytes are optional; a placeholder is drawn without them
//! const pdf = editor.render(logoBytes);
//! download(pdf, editor.fileName());
//! ```

use chrono::NaiveDate;
use invoice_template::{
    output_file_name, parse_company, render_pdf, CompanyProfile, DocumentType, InvoiceDocument,
    InvoiceForm, ItemField, Logo, PartyField,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_document_type(value: &str) -> Result<DocumentType, JsValue> {
    match value.to_ascii_uppercase().as_str() {
        "INVOICE" => Ok(DocumentType::Invoice),
        "QUOTE" => Ok(DocumentType::Quote),
        other => Err(js_error(format!("Unknown document type: {other}"))),
    }
}

fn parse_party_field(value: &str) -> Result<PartyField, JsValue> {
    match value {
        "companyName" => Ok(PartyField::CompanyName),
        "address" => Ok(PartyField::Address),
        "phone" => Ok(PartyField::Phone),
        "email" => Ok(PartyField::Email),
        other => Err(js_error(format!("Unknown party field: {other}"))),
    }
}

fn logo_from(bytes: Option<Vec<u8>>) -> Logo {
    bytes
        .map(Logo::from_bytes_or_placeholder)
        .unwrap_or_default()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TotalsView<'a> {
    subtotal: f64,
    tax_amounts: &'a [f64],
    grand_total: f64,
}

/// Invoice/quote editor with derived totals
#[wasm_bindgen]
pub struct InvoiceEditor {
    form: InvoiceForm,
    company: CompanyProfile,
}

#[wasm_bindgen]
impl InvoiceEditor {
    /// Create an editor for today with the default company profile
    ///
    /// The document number gets a random two-digit suffix.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<InvoiceEditor, JsValue> {
        let now = js_sys::Date::new_0();
        let suffix = (js_sys::Math::random() * 100.0) as u32;
        Self::for_date(now.get_full_year() as i32, now.get_month() + 1, now.get_date(), suffix)
    }

    /// Create an editor for a fixed date and number suffix
    ///
    /// @param year - Gregorian year
    /// @param month - Month (1-12)
    /// @param day - Day
    /// @param suffix - Number suffix (last two digits are used)
    #[wasm_bindgen(js_name = forDate)]
    pub fn for_date(year: i32, month: u32, day: u32, suffix: u32) -> Result<InvoiceEditor, JsValue> {
        let today = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| js_error(format!("Invalid date: {year}-{month}-{day}")))?;
        let company = CompanyProfile::default();
        let form = InvoiceForm::new(today, suffix, &company).map_err(js_error)?;
        Ok(InvoiceEditor { form, company })
    }

    /// Replace the company profile
    ///
    /// Tax labels and rates already on the form are kept.
    ///
    /// @param json - Company profile JSON; missing fields use the defaults
    #[wasm_bindgen(js_name = setCompany)]
    pub fn set_company(&mut self, json: &str) -> Result<(), JsValue> {
        self.company = parse_company(json).map_err(js_error)?;
        Ok(())
    }

    /// @param documentType - "INVOICE" or "QUOTE"
    #[wasm_bindgen(js_name = setDocumentType)]
    pub fn set_document_type(&mut self, document_type: &str) -> Result<(), JsValue> {
        self.form.set_document_type(parse_document_type(document_type)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = setDocumentNumber)]
    pub fn set_document_number(&mut self, number: &str) {
        self.form.set_document_number(number);
    }

    #[wasm_bindgen(js_name = documentNumber)]
    pub fn document_number(&self) -> String {
        self.form.document_number().to_string()
    }

    #[wasm_bindgen(js_name = setIssueDate)]
    pub fn set_issue_date(&mut self, date: &str) {
        self.form.set_issue_date(date);
    }

    #[wasm_bindgen(js_name = setDueDate)]
    pub fn set_due_date(&mut self, date: &str) {
        self.form.set_due_date(date);
    }

    #[wasm_bindgen(js_name = setCurrency)]
    pub fn set_currency(&mut self, currency: &str) {
        self.form.set_currency(currency);
    }

    /// Append an empty item
    ///
    /// @returns Id of the new item
    #[wasm_bindgen(js_name = addItem)]
    pub fn add_item(&mut self) -> u32 {
        self.form.add_item()
    }

    /// @returns false for an unknown id or the last remaining item
    #[wasm_bindgen(js_name = removeItem)]
    pub fn remove_item(&mut self, id: u32) -> bool {
        self.form.remove_item(id)
    }

    #[wasm_bindgen(js_name = setItemDescription)]
    pub fn set_item_description(&mut self, id: u32, text: &str) -> bool {
        self.form
            .update_item(id, ItemField::Description(text.to_string()))
    }

    /// @param text - Quantity as typed; blank is 0
    #[wasm_bindgen(js_name = setItemQuantity)]
    pub fn set_item_quantity(&mut self, id: u32, text: &str) -> bool {
        self.form.update_item(id, ItemField::Quantity(text.to_string()))
    }

    /// @param text - Unit price as typed; blank is 0
    #[wasm_bindgen(js_name = setItemUnitPrice)]
    pub fn set_item_unit_price(&mut self, id: u32, text: &str) -> bool {
        self.form.update_item(id, ItemField::UnitPrice(text.to_string()))
    }

    /// @param field - "companyName", "address", "phone" or "email"
    #[wasm_bindgen(js_name = setBillingField)]
    pub fn set_billing_field(&mut self, field: &str, value: &str) -> Result<(), JsValue> {
        self.form.set_billing_field(parse_party_field(field)?, value);
        Ok(())
    }

    /// Ignored while shipping mirrors billing
    ///
    /// @returns Whether the edit was applied
    #[wasm_bindgen(js_name = setShippingField)]
    pub fn set_shipping_field(&mut self, field: &str, value: &str) -> Result<bool, JsValue> {
        Ok(self.form.set_shipping_field(parse_party_field(field)?, value))
    }

    #[wasm_bindgen(js_name = setShippingSameAsBilling)]
    pub fn set_shipping_same_as_billing(&mut self, same: bool) {
        self.form.set_shipping_same_as_billing(same);
    }

    #[wasm_bindgen(js_name = setShippingCost)]
    pub fn set_shipping_cost(&mut self, cost: f64) {
        self.form.set_shipping_cost(cost);
    }

    #[wasm_bindgen(js_name = setTaxRate)]
    pub fn set_tax_rate(&mut self, index: usize, rate: f64) -> bool {
        self.form.set_tax_rate(index, rate)
    }

    #[wasm_bindgen(js_name = setTaxLabel)]
    pub fn set_tax_label(&mut self, index: usize, label: &str) -> bool {
        self.form.set_tax_label(index, label)
    }

    /// Current totals
    ///
    /// @returns { subtotal, taxAmounts, grandTotal }
    pub fn totals(&self) -> Result<JsValue, JsValue> {
        let totals = self.form.totals();
        let view = TotalsView {
            subtotal: totals.subtotal,
            tax_amounts: &totals.tax_amounts,
            grand_total: totals.grand_total,
        };
        Ok(serde_wasm_bindgen::to_value(&view)?)
    }

    /// Snapshot of the document as a plain object
    pub fn document(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.form.to_document())?)
    }

    /// Suggested download name, e.g. "INVOICE_2025010542.pdf"
    #[wasm_bindgen(js_name = fileName)]
    pub fn file_name(&self) -> String {
        output_file_name(&self.form.to_document())
    }

    /// Render the current state to PDF
    ///
    /// @param logo - Optional PNG/JPEG bytes (Uint8Array)
    /// @returns PDF bytes (Uint8Array)
    pub fn render(&self, logo: Option<Vec<u8>>) -> Result<Vec<u8>, JsValue> {
        render_pdf(&self.form.to_document(), &logo_from(logo), &self.company).map_err(js_error)
    }
}

/// Render a document object with the default company profile
///
/// @param document - Document object (camelCase fields)
/// @param logo - Optional PNG/JPEG bytes (Uint8Array)
/// @returns PDF bytes (Uint8Array)
#[wasm_bindgen(js_name = renderDocument)]
pub fn render_document(document: JsValue, logo: Option<Vec<u8>>) -> Result<Vec<u8>, JsValue> {
    let document: InvoiceDocument = serde_wasm_bindgen::from_value(document)?;
    render_pdf(&document, &logo_from(logo), &CompanyProfile::default()).map_err(js_error)
}

/// Format an amount the way the PDF shows it, e.g. "US$12.50"
#[wasm_bindgen(js_name = formatMoney)]
pub fn format_money(currency: &str, amount: f64) -> String {
    invoice_text::format_money(currency, amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn editor() -> InvoiceEditor {
        InvoiceEditor::for_date(2025, 1, 5, 42).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_initial_editor() {
        let editor = editor();
        assert_eq!(editor.document_number(), "2025010542");
        assert_eq!(editor.file_name(), "INVOICE_2025010542.pdf");
    }

    #[wasm_bindgen_test]
    fn test_quote_file_name() {
        let mut editor = editor();
        editor.set_document_type("quote").unwrap();
        assert_eq!(editor.file_name(), "QUOTE_2025010542Q.pdf");
        assert!(editor.set_document_type("receipt").is_err());
    }

    #[wasm_bindgen_test]
    fn test_item_editing() {
        let mut editor = editor();
        let id = editor.add_item();
        assert!(editor.set_item_quantity(id, "2"));
        assert!(editor.set_item_unit_price(id, "10"));
        assert!(editor.remove_item(1));
        assert!(!editor.remove_item(id));
    }

    #[wasm_bindgen_test]
    fn test_render_produces_pdf() {
        let pdf = editor().render(None).unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
    }

    #[wasm_bindgen_test]
    fn test_format_money() {
        assert_eq!(format_money("US$", 12.5), "US$12.50");
    }
}
