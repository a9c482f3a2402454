//! Orders and the command bodies accepted by the order endpoints.

use super::article::Article;
use super::customer::{Address, Customer};
use super::enums::{AddressingType, OrderState, PaymentMethod, VatMode};
use super::invoice::Payment;
use super::shipment::Shipment;

dto! {
    pub struct Order {
        id: i64,
        order_number: String,
        state: OrderState,
        vat_mode: VatMode,
        created_at: String,
        shipped_at: String,
        confirmed_at: String,
        payed_at: String,
        seller_comment: String,
        comments: Vec<OrderComment>,
        invoice_number_prefix: String,
        invoice_number_postfix: String,
        invoice_number: i64,
        invoice_date: String,
        invoice_address: Address,
        shipping_address: Address,
        payment_method: PaymentMethod,
        shipping_cost: f64,
        total_cost: f64,
        adjustment_cost: f64,
        adjustment_reason: String,
        order_items: Vec<OrderItem>,
        currency: String,
        seller: Seller,
        buyer: Customer,
        updated_at: String,
        tax_rate1: f64,
        tax_rate2: f64,
        vat_id: String,
        tags: Vec<String>,
        ship_weight_kg: f64,
        language: String,
        paid_amount: f64,
        shipping_profile_id: String,
        shipping_profile_name: String,
        shipping_provider_id: i64,
        shipping_provider_product_id: i64,
        shipping_provider_name: String,
        shipping_provider_product_name: String,
        shipping_ids: Vec<Shipment>,
        payments: Vec<Payment>,
        history: Vec<OrderHistory>,
        custom_fields: Vec<OrderCustomField>,
        last_modified_at: String,
        merchant_vat_id: String,
        customer_vat_id: String,
        delivery_source_country_code: String,
        custom_invoice_note: String,
        customer_number: String,
        distribution_center: String,
        is_cancellation_for: i64,
        accept_loss_of_return_right: bool,
        delivery_date: String,
        invoice_maturity: i32,
        invoice_bonus: f64,
        invoice_skonto: f64,
        invoice_skonto_date: String,
        created_by: String,
        addressing_type: AddressingType,
        delivery_note: String,
        rebate_difference: f64,
        tags2: String,
        invoice_note: String,
        invoice_text: String,
        payment_instruction: String,
        is_prime_order: bool,
        packaging_weight_gr: f64,
        shipping_cost_net: f64,
        order_state_id: i32,
        last_error_message: String,
    }
}

dto! {
    pub struct OrderItem {
        id: i64,
        order_id: i64,
        product: Article,
        quantity: f64,
        total_price: f64,
        tax_amount: f64,
        tax_index: i32,
        discount: f64,
        get_price_from_article_if_any: bool,
        is_cancellation: bool,
        attributes: Vec<OrderItemAttribute>,
        billbee_id: i64,
        transaction_id: String,
        dont_adjust_stock: bool,
        unrebated_total_price: f64,
        serial_number: String,
    }
}

dto! {
    pub struct OrderItemAttribute {
        id: i64,
        name: String,
        value: String,
    }
}

dto! {
    pub struct OrderComment {
        id: i64,
        text: String,
        from_customer: bool,
        created_at: String,
        name: String,
    }
}

dto! {
    pub struct OrderHistory {
        id: i64,
        created_at: String,
        event_type_name: String,
        text: String,
        employee_name: String,
    }
}

dto! {
    pub struct OrderCustomField {
        id: i64,
        name: String,
        value: String,
    }
}

dto! {
    pub struct Seller {
        id: i64,
        nick: String,
        first_name: String,
        last_name: String,
        full_name: String,
        email: String,
    }
}

dto! {
    /// Body of `PATCH orders/{id}/orderstate`.
    pub struct OrderStateUpdate {
        new_state_id: i32,
        comment: String,
    }
}

impl OrderStateUpdate {
    pub fn new(state: OrderState) -> Self {
        Self {
            new_state_id: Some(state.into()),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

dto! {
    pub struct OrderTagCreate {
        tags: Vec<String>,
    }
}

impl<S: Into<String>> FromIterator<S> for OrderTagCreate {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tags: Some(iter.into_iter().map(Into::into).collect()),
        }
    }
}

dto! {
    /// Body of `POST orders/{id}/send-message`.
    pub struct SendMessageModel {
        subject: String,
        body: String,
        send_copy_to_seller: bool,
    }
}

impl SendMessageModel {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            body: Some(body.into()),
            send_copy_to_seller: None,
        }
    }
}

dto! {
    pub struct ParseTextContainer {
        text: String,
    }
}

dto! {
    pub struct TriggerEventContainer {
        name: String,
        delay_in_minutes: i32,
    }
}
