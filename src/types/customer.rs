use super::enums::{AddressType, CustomerType};

dto! {
    pub struct Address {
        id: i64,
        company: String,
        first_name: String,
        last_name: String,
        name_addition: String,
        street: String,
        house_number: String,
        zip: String,
        city: String,
        country_code: String,
        country_name: String,
        #[serde(rename = "CountryISO2")]
        country_iso2: String,
        state: String,
        phone: String,
        email: String,
        address_type: AddressType,
        is_valid_address: bool,
    }
}

dto! {
    pub struct Customer {
        id: i64,
        name: String,
        email: String,
        tel1: String,
        tel2: String,
        number: String,
        price_group_id: i64,
        language_id: i64,
        vat_id: String,
        #[serde(rename = "Type")]
        customer_type: CustomerType,
        addresses: Vec<Address>,
        meta_data: Vec<CustomerMetaData>,
    }
}

dto! {
    pub struct CustomerMetaData {
        id: i64,
        key: String,
        value: String,
    }
}
