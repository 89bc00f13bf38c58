//! Editable form state with derived totals
//!
//! The form layer owns the mutable record behind the editor. Every mutation
//! recomputes the totals, and billing edits are copied into the shipping party
//! while "same as billing" is on. [`InvoiceForm::to_document`] produces the
//! immutable [`InvoiceDocument`] handed to the layout.

use crate::{CompanyProfile, DocumentType, InvoiceDocument, LineItem, Party, Result, TaxRow};
use chrono::NaiveDate;
use invoice_text::{add_days, format_display_date, generate_document_number};

/// Days between issue date and due date
const PAYMENT_TERM_DAYS: u64 = 30;

/// Derived totals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    /// One amount per tax rate, same order
    pub tax_amounts: Vec<f64>,
    pub grand_total: f64,
}

/// NaN counts as zero, everything else is taken as-is
fn or_zero(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Compute subtotal, per-rate tax amounts and grand total
///
/// `tax_rates` are percentages. Line totals are summed as given.
pub fn compute_totals(items: &[LineItem], shipping_cost: f64, tax_rates: &[f64]) -> Totals {
    let subtotal: f64 = items.iter().map(|item| or_zero(item.line_total)).sum();
    let tax_amounts: Vec<f64> = tax_rates
        .iter()
        .map(|rate| subtotal * (or_zero(*rate) / 100.0))
        .collect();
    let grand_total = subtotal + tax_amounts.iter().sum::<f64>() + or_zero(shipping_cost);

    Totals {
        subtotal,
        tax_amounts,
        grand_total,
    }
}

/// Parse a numeric text field
///
/// Blank input is zero. Otherwise the longest leading numeric prefix is used
/// ("12kg" is 12); input with no numeric prefix is NaN.
pub fn parse_numeric_input(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    let prefix_len = text
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);

    (1..=prefix_len)
        .rev()
        .find_map(|len| text[..len].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Editable field of a line item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemField {
    Description(String),
    /// Raw text as typed
    Quantity(String),
    /// Raw text as typed
    UnitPrice(String),
}

/// Editable field of a party
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyField {
    CompanyName,
    Address,
    Phone,
    Email,
}

impl PartyField {
    fn slot(self, party: &mut Party) -> &mut String {
        match self {
            PartyField::CompanyName => &mut party.company_name,
            PartyField::Address => &mut party.address,
            PartyField::Phone => &mut party.phone,
            PartyField::Email => &mut party.email,
        }
    }
}

/// Line item with a stable identity for editing
#[derive(Debug, Clone, PartialEq)]
pub struct FormItem {
    pub id: u32,
    pub item: LineItem,
}

/// Tax row settings; the amount is derived
#[derive(Debug, Clone, PartialEq)]
pub struct TaxSetting {
    pub label: String,
    pub rate: f64,
}

/// Editor state for one invoice or quote
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceForm {
    document_type: DocumentType,
    document_number: String,
    issue_date: String,
    due_date: String,
    billing: Party,
    shipping: Party,
    shipping_same_as_billing: bool,
    items: Vec<FormItem>,
    next_item_id: u32,
    shipping_cost: f64,
    taxes: Vec<TaxSetting>,
    currency: String,
    totals: Totals,
}

impl InvoiceForm {
    /// Initial form for `today`
    ///
    /// The document number is `today` as `YYYYMMDD` followed by the last two
    /// digits of `suffix`. Taxes come from the company's presets.
    pub fn new(today: NaiveDate, suffix: u32, company: &CompanyProfile) -> Result<Self> {
        let due = add_days(today, PAYMENT_TERM_DAYS)?;
        let mut form = Self {
            document_type: DocumentType::Invoice,
            document_number: generate_document_number(today, suffix),
            issue_date: format_display_date(today),
            due_date: format_display_date(due),
            billing: Party::default(),
            shipping: Party::default(),
            shipping_same_as_billing: true,
            items: vec![FormItem {
                id: 1,
                item: LineItem {
                    description: "Fundamental EE Core".to_string(),
                    quantity: 1.0,
                    unit_price: 673.0,
                    line_total: 673.0,
                },
            }],
            next_item_id: 2,
            shipping_cost: 0.0,
            taxes: company
                .tax_presets
                .iter()
                .map(|preset| TaxSetting {
                    label: preset.label.clone(),
                    rate: preset.rate,
                })
                .collect(),
            currency: "US$".to_string(),
            totals: Totals::default(),
        };
        form.recompute();
        Ok(form)
    }

    fn recompute(&mut self) {
        let items: Vec<LineItem> = self.items.iter().map(|i| i.item.clone()).collect();
        let rates: Vec<f64> = self.taxes.iter().map(|t| t.rate).collect();
        self.totals = compute_totals(&items, self.shipping_cost, &rates);
    }

    fn sync_shipping(&mut self) {
        if self.shipping_same_as_billing {
            self.shipping = self.billing.clone();
        }
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn document_number(&self) -> &str {
        &self.document_number
    }

    pub fn items(&self) -> &[FormItem] {
        &self.items
    }

    pub fn billing(&self) -> &Party {
        &self.billing
    }

    pub fn shipping(&self) -> &Party {
        &self.shipping
    }

    pub fn shipping_same_as_billing(&self) -> bool {
        self.shipping_same_as_billing
    }

    pub fn taxes(&self) -> &[TaxSetting] {
        &self.taxes
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// Switch between invoice and quote
    ///
    /// Quote numbers carry a trailing `Q`; switching back strips it.
    pub fn set_document_type(&mut self, document_type: DocumentType) {
        match document_type {
            DocumentType::Quote if !self.document_number.ends_with('Q') => {
                self.document_number.push('Q');
            }
            DocumentType::Invoice if self.document_number.ends_with('Q') => {
                self.document_number.pop();
            }
            _ => {}
        }
        self.document_type = document_type;
    }

    pub fn set_document_number(&mut self, number: &str) {
        self.document_number = number.to_string();
    }

    pub fn set_issue_date(&mut self, date: &str) {
        self.issue_date = date.to_string();
    }

    pub fn set_due_date(&mut self, date: &str) {
        self.due_date = date.to_string();
    }

    pub fn set_currency(&mut self, currency: &str) {
        self.currency = currency.to_string();
    }

    /// Append an empty item (quantity 1, price 0) and return its id
    pub fn add_item(&mut self) -> u32 {
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.items.push(FormItem {
            id,
            item: LineItem {
                description: String::new(),
                quantity: 1.0,
                unit_price: 0.0,
                line_total: 0.0,
            },
        });
        self.recompute();
        id
    }

    /// Remove an item; the last remaining item cannot be removed
    pub fn remove_item(&mut self, id: u32) -> bool {
        if self.items.len() <= 1 {
            return false;
        }
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.recompute();
        }
        removed
    }

    /// Edit one field of an item and recompute its line total
    pub fn update_item(&mut self, id: u32, field: ItemField) -> bool {
        let Some(entry) = self.items.iter_mut().find(|i| i.id == id) else {
            return false;
        };

        let item = &mut entry.item;
        match field {
            ItemField::Description(text) => item.description = text,
            ItemField::Quantity(text) => item.quantity = parse_numeric_input(&text),
            ItemField::UnitPrice(text) => item.unit_price = parse_numeric_input(&text),
        }
        item.line_total = or_zero(item.quantity) * or_zero(item.unit_price);

        self.recompute();
        true
    }

    pub fn set_billing(&mut self, party: Party) {
        self.billing = party;
        self.sync_shipping();
    }

    pub fn set_billing_field(&mut self, field: PartyField, value: &str) {
        *field.slot(&mut self.billing) = value.to_string();
        self.sync_shipping();
    }

    /// Edit the shipping party; ignored while it mirrors billing
    pub fn set_shipping_field(&mut self, field: PartyField, value: &str) -> bool {
        if self.shipping_same_as_billing {
            return false;
        }
        *field.slot(&mut self.shipping) = value.to_string();
        true
    }

    /// Turn billing mirroring on or off; turning it on copies billing now
    pub fn set_shipping_same_as_billing(&mut self, same: bool) {
        self.shipping_same_as_billing = same;
        self.sync_shipping();
    }

    pub fn set_shipping_cost(&mut self, cost: f64) {
        self.shipping_cost = cost;
        self.recompute();
    }

    pub fn set_tax_rate(&mut self, index: usize, rate: f64) -> bool {
        let Some(tax) = self.taxes.get_mut(index) else {
            return false;
        };
        tax.rate = rate;
        self.recompute();
        true
    }

    pub fn set_tax_label(&mut self, index: usize, label: &str) -> bool {
        let Some(tax) = self.taxes.get_mut(index) else {
            return false;
        };
        tax.label = label.to_string();
        true
    }

    /// Snapshot the form as a document for the layout
    pub fn to_document(&self) -> InvoiceDocument {
        let taxes = self
            .taxes
            .iter()
            .zip(&self.totals.tax_amounts)
            .map(|(setting, amount)| TaxRow {
                label: setting.label.clone(),
                rate: setting.rate,
                amount: *amount,
            })
            .collect();

        InvoiceDocument {
            document_type: self.document_type,
            document_number: self.document_number.clone(),
            issue_date: self.issue_date.clone(),
            due_date: self.due_date.clone(),
            billing_party: self.billing.clone(),
            shipping_party: self.shipping.clone(),
            line_items: self.items.iter().map(|i| i.item.clone()).collect(),
            subtotal: self.totals.subtotal,
            shipping_cost: or_zero(self.shipping_cost),
            taxes,
            grand_total: self.totals.grand_total,
            currency_symbol: self.currency.clone(),
        }
    }
}
