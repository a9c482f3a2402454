use super::customer::Address;
use super::enums::PaymentMethod;

dto! {
    pub struct Invoice {
        id: i64,
        invoice_number: String,
        invoice_date: String,
        intro_text: String,
        outro_text: String,
        invoice_note_text: String,
        total_gross: f64,
        total_net: f64,
        total_tax: f64,
        currency: String,
        invoice_address: Address,
        items: Vec<InvoiceItem>,
        payments: Vec<Payment>,
        vat_rates: Vec<VatRate>,
    }
}

dto! {
    pub struct InvoiceItem {
        id: i64,
        #[serde(rename = "SKU")]
        sku: String,
        name: String,
        quantity: f64,
        total_gross: f64,
        total_net: f64,
        tax_amount: f64,
        tax_rate: f64,
        discount: f64,
    }
}

dto! {
    pub struct Payment {
        id: i64,
        date: String,
        amount: f64,
        payment_type: PaymentMethod,
        transaction_id: String,
        reference: String,
        name: String,
        purpose: String,
    }
}

dto! {
    pub struct VatRate {
        vat_rate: f64,
        taxable_amount: f64,
        tax_amount: f64,
    }
}
