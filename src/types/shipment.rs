dto! {
    pub struct Shipment {
        id: i64,
        shipping_id: String,
        shipping_provider_id: i64,
        shipping_provider_product_id: i64,
        shipping_provider_name: String,
        shipping_provider_product_name: String,
        shipping_date: String,
        tracking_url: String,
        tracking_number: String,
        label_data_pdf: String,
        export_documents_pdf: String,
        dimension: ShipmentDimension,
        weight_in_gram: f64,
        automatic_tracking_mail_enabled: bool,
        shipping_cost: f64,
        insured_value: f64,
        insured_currency: String,
        services: Vec<ShipmentService>,
    }
}

dto! {
    pub struct ShipmentDimension {
        length: f64,
        width: f64,
        height: f64,
    }
}

dto! {
    pub struct ShipmentService {
        name: String,
        parameter: String,
    }
}

dto! {
    /// Body of `POST orders/{id}/shipment`.
    pub struct AddShipmentModel {
        order_id: i64,
        shipping_id: String,
        shipping_provider_id: i64,
        shipping_provider_product_id: i64,
        shipping_provider_name: String,
        shipping_provider_product_name: String,
        tracking_url: String,
        tracking_number: String,
        weight_in_gram: f64,
        label_data_pdf: String,
        export_documents_pdf: String,
        dimension: ShipmentDimension,
        services: Vec<ShipmentService>,
    }
}

impl AddShipmentModel {
    pub fn new(order_id: i64, shipping_id: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id),
            shipping_id: Some(shipping_id.into()),
            ..Default::default()
        }
    }
}
