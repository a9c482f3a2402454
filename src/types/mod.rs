//! Billbee wire types.
//!
//! Every record mirrors the API's PascalCase JSON. All fields are optional:
//! the same struct is used to read full records and to send partial ones
//! for create/patch calls, and unset fields are left out of the payload.
//!
//! ## Submodules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`envelope`] | `{ErrorCode, ErrorMessage, Data, Paging}` response envelope |
//! | [`article`] | Articles, images, stock updates |
//! | [`order`] | Orders, items, order commands |
//! | [`customer`] | Customers and addresses |
//! | [`shipment`] | Shipments attached to orders |
//! | [`invoice`] | Invoices and payments |
//! | [`misc`] | Events, cloud storages, layouts, enum entries, provisioning |
//! | [`enums`] | Numeric wire enums |

/// Declares a PascalCase DTO whose fields are all `Option`, omitted when unset.
macro_rules! dto {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }
    };
}

/// Declares an integer-coded enum; unknown codes land in `Other`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident = $value:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "i32", into = "i32")]
        pub enum $name {
            $( $variant, )*
            Other(i32),
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                match value {
                    $( $value => $name::$variant, )*
                    other => $name::Other(other),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                match value {
                    $( $name::$variant => $value, )*
                    $name::Other(other) => other,
                }
            }
        }
    };
}

pub mod article;
pub mod customer;
pub mod envelope;
pub mod enums;
pub mod invoice;
pub mod misc;
pub mod order;
pub mod shipment;

pub use article::{
    Article, ArticleCustomField, ArticleImage, ArticleSource, BillOfMaterialItem,
    DeletedImagesModel, ReservedAmount, UpdateStockCodeModel, UpdateStockCodeResponse,
    UpdateStockModel, UpdateStockResponse,
};
pub use customer::{Address, Customer, CustomerMetaData};
pub use envelope::{ApiResponse, PagedApiResponse, Paging};
pub use enums::{
    AddressType, AddressingType, ArticleType, CloudStorageType, CustomFieldType, CustomerType,
    EventType, LayoutTemplateType, OrderState, PaymentMethod, VatMode,
};
pub use invoice::{Invoice, InvoiceItem, Payment, VatRate};
pub use misc::{CloudStorage, CreateAccountModel, EnumEntry, Event, LayoutTemplate, TermsInfo};
pub use order::{
    Order, OrderComment, OrderCustomField, OrderHistory, OrderItem, OrderItemAttribute,
    OrderStateUpdate, OrderTagCreate, ParseTextContainer, SendMessageModel, Seller,
    TriggerEventContainer,
};
pub use shipment::{AddShipmentModel, Shipment, ShipmentDimension, ShipmentService};
